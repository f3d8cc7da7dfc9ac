use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
};
use serde_json::Value;

use webauthn_gateway::{
    AuthenticationVerdict, BodyFields, ProtocolEngine, QueryParams, VerifiedRegistration,
    build_authentication_options, build_registration_options, verify_authentication,
    verify_registration,
};

use crate::error::IntoResponseError;

pub(crate) type SharedEngine = Arc<dyn ProtocolEngine>;

pub(crate) async fn registration_options(
    State(engine): State<SharedEngine>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, (StatusCode, String)> {
    let query = QueryParams::parse(query.as_deref());

    let options = build_registration_options(engine.as_ref(), &query)
        .await
        .into_response_error()?;

    Ok(Json(options))
}

pub(crate) async fn registration_verify(
    State(engine): State<SharedEngine>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Json<VerifiedRegistration>, (StatusCode, String)> {
    let query = QueryParams::parse(query.as_deref());
    let body = BodyFields::parse(&body).into_response_error()?;

    let result = verify_registration(engine.as_ref(), &query, &body)
        .await
        .into_response_error()?;

    Ok(Json(result))
}

pub(crate) async fn authentication_options(
    State(engine): State<SharedEngine>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, (StatusCode, String)> {
    let query = QueryParams::parse(query.as_deref());

    let options = build_authentication_options(engine.as_ref(), &query)
        .await
        .into_response_error()?;

    Ok(Json(options))
}

pub(crate) async fn authentication_verify(
    State(engine): State<SharedEngine>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Json<AuthenticationVerdict>, (StatusCode, String)> {
    let query = QueryParams::parse(query.as_deref());
    let body = BodyFields::parse(&body).into_response_error()?;

    let verdict = verify_authentication(engine.as_ref(), &query, &body)
        .await
        .into_response_error()?;

    Ok(Json(verdict))
}

/// Plain-text 404 for unknown paths and unknown methods alike.
pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
