use serde_json::Value;

use super::errors::CeremonyError;
use super::extract::QueryParams;
use super::types::CredentialDescriptor;
use crate::config::{
    ATTESTATION, DEFAULT_AUTHENTICATOR_ATTACHMENT, RESIDENT_KEY, USER_VERIFICATION,
};
use crate::engine::{
    AuthenticationOptionsRequest, AuthenticatorSelection, ProtocolEngine,
    RegistrationOptionsRequest,
};

/// Assemble registration ceremony options from request parameters.
///
/// Requires `rpName`, `rpID`, `userID` and `userName`; reads the optional
/// repeated `excludeCredentials[]` key and the `authenticatorAttachment`
/// enum. Extraction completes before the engine is asked to generate a
/// challenge, so invalid input never consumes one. The engine's options are
/// returned to the caller unmodified.
pub async fn build_registration_options(
    engine: &dyn ProtocolEngine,
    query: &QueryParams,
) -> Result<Value, CeremonyError> {
    let rp_name = query.require("rpName")?.to_string();
    let rp_id = query.require("rpID")?.to_string();
    let user_id = query.require("userID")?.to_string();
    let user_name = query.require("userName")?.to_string();
    let exclude_credentials =
        query.optional_array("excludeCredentials[]", CredentialDescriptor::from_json)?;
    let authenticator_attachment = query
        .optional_enum(
            "authenticatorAttachment",
            DEFAULT_AUTHENTICATOR_ATTACHMENT.as_str(),
            &["platform", "cross-platform"],
        )?
        .to_string();

    let request = RegistrationOptionsRequest {
        rp_name,
        rp_id,
        user_id,
        user_name,
        exclude_credentials,
        authenticator_selection: AuthenticatorSelection {
            authenticator_attachment,
            resident_key: RESIDENT_KEY.to_string(),
            user_verification: USER_VERIFICATION.to_string(),
        },
        attestation: ATTESTATION.to_string(),
    };

    tracing::debug!("Registration options request: {:?}", request);

    Ok(engine.generate_registration_options(request).await?)
}

/// Assemble authentication ceremony options from request parameters.
///
/// Requires only `rpID`; user verification is always `preferred`.
pub async fn build_authentication_options(
    engine: &dyn ProtocolEngine,
    query: &QueryParams,
) -> Result<Value, CeremonyError> {
    let rp_id = query.require("rpID")?.to_string();

    let request = AuthenticationOptionsRequest {
        rp_id,
        user_verification: USER_VERIFICATION.to_string(),
    };

    tracing::debug!("Authentication options request: {:?}", request);

    Ok(engine.generate_authentication_options(request).await?)
}
