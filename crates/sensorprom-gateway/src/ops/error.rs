use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use sensorprom_core::SensorPromError;

/// Handler failure. Only programmer errors (label arity) reach this path.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub SensorPromError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        let body = json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
