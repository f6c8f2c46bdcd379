use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
    Json,
};
use service::auth::domain::{LoginInput, LoginOutput};
use service::auth::extract_bearer_token;
use tracing::{info, warn};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<LoginOutput>, JsonApiError> {
    let Some(auth) = state.auth.as_ref() else {
        return Err(JsonApiError::unauthenticated("authentication is disabled"));
    };
    let Json(input) = body.map_err(|e| JsonApiError::invalid_argument(format!("invalid request body: {}", e.body_text())))?;
    let out = auth.login(input).await?;
    info!(user_id = %out.user_id, organization = %out.organization, "login succeeded");
    Ok(Json(out))
}

/// Require `Authorization: Bearer <jwt>`; preflight requests pass through.
/// Verified claims are stored in the request extensions.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let Some(auth) = state.auth.as_ref() else {
        return Ok(next.run(req).await);
    };
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path().to_string();
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let claims = extract_bearer_token(header_value)
        .and_then(|token| auth.jwt().validate_token(token))
        .map_err(|e| {
            warn!(path = %path, error = %e, "rejected unauthenticated request");
            JsonApiError::unauthenticated(format!("unauthenticated: {e}"))
        })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
