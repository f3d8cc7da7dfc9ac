use super::errors::CeremonyError;
use super::extract::{BodyFields, QueryParams};
use super::types::{
    AuthenticationResponse, RegistrationResponse, StoredAuthenticator, VerifiedRegistration,
};
use crate::engine::{
    AuthenticationVerdict, AuthenticationVerification, EngineError, ProtocolEngine,
    RegistrationVerification,
};
use crate::utils::base64url_encode;

/// Verify a client-submitted registration ceremony response.
///
/// Extracts the `response` body field and the `challenge`, `origin` and
/// `rpID` query parameters before the engine is invoked; the engine never
/// sees partially validated input. An unverified verdict surfaces as
/// `VerificationFailed` with no further detail for the client.
pub async fn verify_registration(
    engine: &dyn ProtocolEngine,
    query: &QueryParams,
    body: &BodyFields,
) -> Result<VerifiedRegistration, CeremonyError> {
    let response = body.require("response", RegistrationResponse::from_value)?;
    let expected_challenge = query.require("challenge")?.to_string();
    let expected_origin = query.require("origin")?.to_string();
    let expected_rp_id = query.require("rpID")?.to_string();

    let verdict = engine
        .verify_registration_response(RegistrationVerification {
            response,
            expected_challenge,
            expected_origin,
            expected_rp_id,
        })
        .await?;

    if !verdict.verified {
        tracing::debug!("Registration ceremony reported unverified");
        return Err(CeremonyError::VerificationFailed);
    }

    // A verified verdict must carry the credential material; anything else
    // is an engine contract breach, not a client failure.
    let info = verdict.registration_info.ok_or_else(|| {
        EngineError::new("verified registration verdict without registration info")
    })?;

    tracing::debug!("Registration ceremony verified, counter {}", info.counter);

    Ok(VerifiedRegistration {
        counter: info.counter,
        credential_id: base64url_encode(&info.credential_id),
        public_key: base64url_encode(&info.credential_public_key),
    })
}

/// Verify a client-submitted authentication ceremony response.
///
/// Extracts the `authenticator` record and `response` body fields plus the
/// `challenge`, `origin` and `rpID` query parameters, then passes the
/// engine's verdict through unmodified. An unverified verdict (stale
/// counter, challenge mismatch, bad signature) surfaces as
/// `VerificationFailed`.
pub async fn verify_authentication(
    engine: &dyn ProtocolEngine,
    query: &QueryParams,
    body: &BodyFields,
) -> Result<AuthenticationVerdict, CeremonyError> {
    let authenticator = body.require("authenticator", StoredAuthenticator::from_value)?;
    let response = body.require("response", AuthenticationResponse::from_value)?;
    let expected_challenge = query.require("challenge")?.to_string();
    let expected_origin = query.require("origin")?.to_string();
    let expected_rp_id = query.require("rpID")?.to_string();

    let verdict = engine
        .verify_authentication_response(AuthenticationVerification {
            authenticator,
            response,
            expected_challenge,
            expected_origin,
            expected_rp_id,
        })
        .await?;

    if !verdict.verified {
        tracing::debug!("Authentication ceremony reported unverified");
        return Err(CeremonyError::VerificationFailed);
    }

    Ok(verdict)
}
