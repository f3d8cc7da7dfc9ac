//! webauthn_gateway_axum - Axum integration for the WebAuthn ceremony gateway
//!
//! Maps the two ceremony paths (`/register`, `/login`) onto the gateway's
//! four operations and translates every failure into the matching HTTP
//! status once, at the boundary.

mod error;
mod handlers;
mod router;

pub use error::IntoResponseError;
pub use router::{ceremony_router, ceremony_router_no_trace};

// Re-export the engine seam and initialization from the core crate so
// applications and engine implementations only need this crate.
pub use webauthn_gateway::{
    AuthenticationInfo, AuthenticationOptionsRequest, AuthenticationResponse,
    AuthenticationVerdict, AuthenticationVerification, AuthenticatorSelection,
    CredentialDescriptor, EngineError, ProtocolEngine, RegistrationInfo,
    RegistrationOptionsRequest, RegistrationResponse, RegistrationVerdict,
    RegistrationVerification, StoredAuthenticator, VerifiedRegistration, init,
};
