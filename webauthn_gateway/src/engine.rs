use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::ceremony::{
    AuthenticationResponse, CredentialDescriptor, RegistrationResponse, StoredAuthenticator,
};

/// Failure reported by the external protocol engine itself.
///
/// This covers the engine throwing, not the engine deciding a ceremony did
/// not verify; an unverified verdict is a normal return value, not an error.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EngineError(String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Authenticator selection criteria sent with registration options.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelection {
    pub authenticator_attachment: String,
    pub resident_key: String,
    pub user_verification: String,
}

/// Inputs for generating registration ceremony options.
///
/// Every field has been validated before the engine sees it; the engine owns
/// challenge generation and algorithm negotiation.
#[derive(Clone, Debug)]
pub struct RegistrationOptionsRequest {
    pub rp_name: String,
    pub rp_id: String,
    pub user_id: String,
    pub user_name: String,
    pub exclude_credentials: Vec<CredentialDescriptor>,
    pub authenticator_selection: AuthenticatorSelection,
    pub attestation: String,
}

/// Inputs for generating authentication ceremony options.
#[derive(Clone, Debug)]
pub struct AuthenticationOptionsRequest {
    pub rp_id: String,
    pub user_verification: String,
}

/// Inputs for verifying a registration ceremony response.
///
/// The expected challenge, origin and RP ID are re-supplied by the caller;
/// the gateway holds no ceremony state between the two HTTP exchanges.
#[derive(Clone, Debug)]
pub struct RegistrationVerification {
    pub response: RegistrationResponse,
    pub expected_challenge: String,
    pub expected_origin: String,
    pub expected_rp_id: String,
}

/// Inputs for verifying an authentication ceremony response.
#[derive(Clone, Debug)]
pub struct AuthenticationVerification {
    pub authenticator: StoredAuthenticator,
    pub response: AuthenticationResponse,
    pub expected_challenge: String,
    pub expected_origin: String,
    pub expected_rp_id: String,
}

/// Engine verdict on a registration ceremony.
#[derive(Clone, Debug, Default)]
pub struct RegistrationVerdict {
    pub verified: bool,
    pub registration_info: Option<RegistrationInfo>,
}

/// Credential material extracted by the engine from a verified registration.
#[derive(Clone, Debug)]
pub struct RegistrationInfo {
    /// Raw credential ID bytes
    pub credential_id: Vec<u8>,
    /// Raw public key bytes for the credential
    pub credential_public_key: Vec<u8>,
    /// Initial signature counter reported by the authenticator
    pub counter: u32,
}

/// Engine verdict on an authentication ceremony.
///
/// Returned to the caller unmodified when the ceremony verified; the updated
/// counter must be persisted by the caller to keep clone detection working.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AuthenticationVerdict {
    pub verified: bool,
    #[serde(rename = "authenticationInfo", skip_serializing_if = "Option::is_none")]
    pub authentication_info: Option<AuthenticationInfo>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AuthenticationInfo {
    #[serde(rename = "newCounter")]
    pub new_counter: u32,
}

/// External WebAuthn protocol engine.
///
/// The gateway delegates challenge generation and all cryptographic
/// verification (signatures, attestation parsing, challenge/origin/RP-ID
/// binding) to an implementation of this trait. Option values are opaque to
/// the gateway and are returned to the client unmodified.
#[async_trait]
pub trait ProtocolEngine: Send + Sync {
    async fn generate_registration_options(
        &self,
        request: RegistrationOptionsRequest,
    ) -> Result<Value, EngineError>;

    async fn verify_registration_response(
        &self,
        request: RegistrationVerification,
    ) -> Result<RegistrationVerdict, EngineError>;

    async fn generate_authentication_options(
        &self,
        request: AuthenticationOptionsRequest,
    ) -> Result<Value, EngineError>;

    async fn verify_authentication_response(
        &self,
        request: AuthenticationVerification,
    ) -> Result<AuthenticationVerdict, EngineError>;
}
