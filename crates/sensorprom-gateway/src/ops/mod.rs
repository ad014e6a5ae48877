//! HTTP endpoints.
//!
//! - `/`         : health check (also the fallback for unknown paths)
//! - `/api/data` : simulated processing with random latency and errors
//! - `/metrics`  : Prometheus text format

mod error;

use std::time::Instant;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use sensorprom_core::metrics::TEXT_CONTENT_TYPE;

use crate::app_state::AppState;

pub use error::ApiError;

pub const DATA_BODY: &str = r#"{"status": "processed"}"#;

pub async fn health(State(state): State<AppState>, method: Method) -> Result<Response, ApiError> {
    let start = Instant::now();
    let metrics = state.metrics();

    tracing::debug!(method = %method, "health check");
    metrics.count_request("/", method.as_str(), "200")?;
    let resp = (StatusCode::OK, "OK").into_response();

    metrics.observe_duration("/", start.elapsed())?;
    Ok(resp)
}

pub async fn data(State(state): State<AppState>, method: Method) -> Result<Response, ApiError> {
    let start = Instant::now();
    let metrics = state.metrics();
    let rng = state.rng();
    let cfg = &state.cfg().data;

    // Latency is drawn before the error roll.
    tokio::time::sleep(rng.below_millis(cfg.max_latency_ms)).await;

    let (status, code) = if rng.bernoulli(cfg.error_rate) {
        (StatusCode::INTERNAL_SERVER_ERROR, "500")
    } else {
        (StatusCode::OK, "200")
    };
    tracing::debug!(method = %method, status = code, "data request processed");

    metrics.count_request("/api/data", method.as_str(), code)?;
    let resp = (status, [(header::CONTENT_TYPE, "application/json")], DATA_BODY).into_response();

    metrics.observe_duration("/api/data", start.elapsed())?;
    Ok(resp)
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        body,
    )
        .into_response()
}
