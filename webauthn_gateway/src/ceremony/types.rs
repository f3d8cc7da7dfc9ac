use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies a single credential to exclude from registration or to target
/// for authentication.
///
/// Follows the WebAuthn `PublicKeyCredentialDescriptor` shape; unknown JSON
/// fields (e.g. `transports`) are ignored. Uniqueness across a submitted
/// sequence is not enforced here.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CredentialDescriptor {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: String,
}

impl CredentialDescriptor {
    /// Decode one JSON-encoded descriptor, e.g. an `excludeCredentials[]`
    /// query value.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let descriptor: Self = serde_json::from_str(raw)
            .map_err(|e| format!("not a credential descriptor: {e}"))?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    fn validate(&self) -> Result<(), String> {
        if self.type_ != "public-key" {
            return Err(format!(
                "credential type must be \"public-key\", got \"{}\"",
                self.type_
            ));
        }
        Ok(())
    }
}

/// Body fields may carry their payload either as a JSON object or as a
/// JSON-stringified object (the browser adapter submits the latter).
fn unwrap_json(value: &Value) -> Result<Value, String> {
    match value {
        Value::String(raw) => serde_json::from_str(raw).map_err(|e| format!("not valid JSON: {e}")),
        other => Ok(other.clone()),
    }
}

/// Client-submitted proof object for a registration ceremony.
///
/// Only the fields the protocol engine needs are retained; anything else the
/// browser attaches is dropped during decoding.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RegistrationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "attestationObject")]
    pub attestation_object: String,
}

impl RegistrationResponse {
    /// Shape decoder for the `response` body field of a registration POST.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let value = unwrap_json(value)?;
        serde_json::from_value(value).map_err(|e| format!("not a registration response: {e}"))
    }
}

/// Client-submitted proof object for an authentication ceremony.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AuthenticationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "authenticatorData")]
    pub authenticator_data: String,
    pub signature: String,
}

impl AuthenticationResponse {
    /// Shape decoder for the `response` body field of an authentication POST.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let value = unwrap_json(value)?;
        serde_json::from_value(value).map_err(|e| format!("not an authentication response: {e}"))
    }
}

/// Caller-supplied record of a previously registered authenticator.
///
/// Loaded from the caller's storage and read for the duration of one
/// verification call; the updated counter comes back in the verdict.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct StoredAuthenticator {
    pub id: String,
    /// Signature counter as of the last verified authentication
    pub counter: u32,
}

impl StoredAuthenticator {
    /// Shape decoder for the `authenticator` body field.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let value = unwrap_json(value)?;
        serde_json::from_value(value).map_err(|e| format!("not an authenticator record: {e}"))
    }
}

/// Canonical output of a verified registration ceremony, ready for the
/// caller to persist.
///
/// The credential ID and public key are base64url encodings (no padding) of
/// the binary material the protocol engine extracted.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct VerifiedRegistration {
    pub counter: u32,
    #[serde(rename = "credentialID")]
    pub credential_id: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}
