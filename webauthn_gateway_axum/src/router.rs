//! Router mapping the two ceremony paths onto the four gateway operations

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use webauthn_gateway::ProtocolEngine;

use crate::handlers::{
    authentication_options, authentication_verify, not_found, registration_options,
    registration_verify,
};

/// Create the ceremony router
///
/// GET generates ceremony options, POST verifies a ceremony response:
/// - `/register` — registration ceremony
/// - `/login` — authentication ceremony
///
/// Anything else, including unsupported methods on the two known paths,
/// answers 404 `Not found`. The router holds no cross-request state; the
/// two exchanges of a ceremony are correlated by the caller re-supplying
/// challenge, origin and RP ID on the POST.
pub fn ceremony_router(engine: Arc<dyn ProtocolEngine>) -> Router {
    ceremony_router_no_trace(engine).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create the ceremony router without HTTP tracing middleware
///
/// Use this if you want to add your own tracing middleware or if you don't
/// need HTTP request tracing.
pub fn ceremony_router_no_trace(engine: Arc<dyn ProtocolEngine>) -> Router {
    Router::new()
        .route(
            "/register",
            get(registration_options)
                .post(registration_verify)
                .fallback(not_found),
        )
        .route(
            "/login",
            get(authentication_options)
                .post(authentication_verify)
                .fallback(not_found),
        )
        .fallback(not_found)
        .with_state(engine)
}
