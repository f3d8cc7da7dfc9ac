use thiserror::Error;

use crate::engine::EngineError;

/// Errors that can occur while driving a WebAuthn ceremony step.
///
/// The first four variants are client-attributable and carry the message
/// that is returned with the HTTP 400 response. Engine failures carry
/// internal detail that must stay server-side.
#[derive(Debug, Error)]
pub enum CeremonyError {
    /// A required query or body field was absent or empty
    #[error("Missing required parameter \"{0}\"")]
    MissingParameter(String),

    /// A field was present but failed its shape or enum predicate
    #[error("Invalid value for parameter \"{0}\"")]
    InvalidParameter(String),

    /// The request body was not valid JSON or not a JSON object
    #[error("Malformed request body")]
    MalformedRequestBody,

    /// The protocol engine reported the ceremony as unverified
    #[error("Verification failed")]
    VerificationFailed,

    /// The protocol engine itself failed
    #[error("Protocol engine failure: {0}")]
    Engine(#[from] EngineError),
}

impl CeremonyError {
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingParameter(name.to_string())
    }

    pub(crate) fn invalid(name: &str) -> Self {
        Self::InvalidParameter(name.to_string())
    }
}
