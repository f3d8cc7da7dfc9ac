use serde_json::{Map, Value};

use super::errors::CeremonyError;

/// Decoded query-string parameters of one request.
///
/// Keys may repeat; `require` and `optional_enum` read the first occurrence,
/// `optional_array` reads all of them. Values are percent-decoded.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
            .into_owned()
            .collect();
        Self(pairs)
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value for `name`, rejecting absent and empty values.
    pub fn require(&self, name: &str) -> Result<&str, CeremonyError> {
        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(CeremonyError::missing(name)),
        }
    }

    /// Returns the value for `name` when it is a member of `allowed`, the
    /// default when absent, and `InvalidParameter` when present but not a
    /// member.
    pub fn optional_enum<'a>(
        &'a self,
        name: &str,
        default: &'a str,
        allowed: &[&str],
    ) -> Result<&'a str, CeremonyError> {
        match self.get(name) {
            None | Some("") => Ok(default),
            Some(value) if allowed.contains(&value) => Ok(value),
            Some(_) => Err(CeremonyError::invalid(name)),
        }
    }

    /// Decodes every value of the repeated key `name`, failing with
    /// `InvalidParameter` on the first element the decoder rejects.
    pub fn optional_array<T>(
        &self,
        name: &str,
        decode: impl Fn(&str) -> Result<T, String>,
    ) -> Result<Vec<T>, CeremonyError> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, raw)| {
                decode(raw).map_err(|reason| {
                    tracing::debug!("Rejected element of {}: {}", name, reason);
                    CeremonyError::invalid(name)
                })
            })
            .collect()
    }
}

/// JSON object body of one request.
#[derive(Debug)]
pub struct BodyFields(Map<String, Value>);

impl BodyFields {
    /// Parse the raw request body, which must be a JSON object.
    pub fn parse(bytes: &[u8]) -> Result<Self, CeremonyError> {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            _ => Err(CeremonyError::MalformedRequestBody),
        }
    }

    /// Decodes the field `name`, which must be present.
    ///
    /// Decoders are total: they reject with a reason instead of panicking,
    /// and a rejection surfaces as `InvalidParameter` for this field.
    pub fn require<T>(
        &self,
        name: &str,
        decode: impl Fn(&Value) -> Result<T, String>,
    ) -> Result<T, CeremonyError> {
        let value = self
            .0
            .get(name)
            .ok_or_else(|| CeremonyError::missing(name))?;
        decode(value).map_err(|reason| {
            tracing::debug!("Rejected body field {}: {}", name, reason);
            CeremonyError::invalid(name)
        })
    }
}
