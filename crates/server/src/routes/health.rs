use axum::{extract::State, http::{header, StatusCode}, response::IntoResponse, Json};
use common::types::Health;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "catalog-service";

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION"), state.auth_enabled()))
}

/// Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, [(header::CONTENT_TYPE, "text/plain")], e),
    }
}
