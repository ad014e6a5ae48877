//! Axum router wiring.
//!
//! Unknown paths fall through to the health handler, as `/` is a catch-all.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(ops::health))
        .route("/api/data", any(ops::data))
        .route("/metrics", get(ops::metrics))
        .fallback(ops::health)
        .with_state(state)
}
