//! webauthn_gateway - WebAuthn relying-party ceremony gateway
//!
//! This crate turns extracted HTTP request parameters into WebAuthn ceremony
//! options and validates client-submitted ceremony responses before handing
//! them to an external protocol engine for cryptographic verification.

mod ceremony;
mod config;
mod engine;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export the ceremony operations and the request-side types
pub use ceremony::{
    AuthenticationResponse, BodyFields, CeremonyError, CredentialDescriptor, QueryParams,
    RegistrationResponse, StoredAuthenticator, VerifiedRegistration,
    build_authentication_options, build_registration_options, verify_authentication,
    verify_registration,
};

// Re-export the protocol engine seam
pub use engine::{
    AuthenticationInfo, AuthenticationOptionsRequest, AuthenticationVerdict,
    AuthenticationVerification, AuthenticatorSelection, EngineError, ProtocolEngine,
    RegistrationInfo, RegistrationOptionsRequest, RegistrationVerdict, RegistrationVerification,
};

/// Initialize the ceremony gateway
pub fn init() {
    dotenvy::dotenv().ok();
    // Validate environment-backed defaults early
    let _ = config::DEFAULT_AUTHENTICATOR_ATTACHMENT.as_str();
}
