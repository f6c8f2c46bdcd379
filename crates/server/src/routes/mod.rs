pub mod auth;
pub mod catalog;
pub mod health;

use axum::{middleware, routing::{get, post}, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Build the full application router.
///
/// `/health` and `/metrics` are always public. With authentication enabled,
/// `/auth/login` is mounted and every `/v1` route requires a bearer token.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let mut v1 = Router::new()
        .route("/v1/services", get(catalog::list_services))
        .route("/v1/services/:id", get(catalog::get_service))
        .route("/v1/services/:id/versions", get(catalog::get_service_versions));

    let mut public = Router::new()
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics));

    if state.auth_enabled() {
        v1 = v1.route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer));
        public = public.route("/auth/login", post(auth::login));
    }

    public
        .merge(v1)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
