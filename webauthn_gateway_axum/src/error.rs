use http::StatusCode;
use webauthn_gateway::CeremonyError;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for CeremonyError, classifying each failure exactly once
///
/// Client-attributable failures return their display message with HTTP 400.
/// Engine failures are logged with their detail and return a generic
/// message, since verification internals must not reach the client.
impl<T> IntoResponseError<T> for Result<T, CeremonyError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| match e {
            CeremonyError::Engine(_) => {
                tracing::error!("Internal server error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            CeremonyError::MissingParameter(_)
            | CeremonyError::InvalidParameter(_)
            | CeremonyError::MalformedRequestBody
            | CeremonyError::VerificationFailed => {
                tracing::warn!("Bad request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
        })
    }
}
