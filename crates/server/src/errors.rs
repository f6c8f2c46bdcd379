use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::auth::AuthError;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Status code for a request the client abandoned.
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

const CODE_INVALID_ARGUMENT: u16 = 3;
const CODE_INTERNAL: u16 = 13;
const CODE_UNAUTHENTICATED: u16 = 16;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: u16,
    message: &'a str,
    details: Vec<serde_json::Value>,
}

/// Error response in the `{code, message, details}` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub code: u16,
    pub message: String,
}

impl JsonApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code: CODE_INVALID_ARGUMENT, message: message.into() }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self { status: StatusCode::UNAUTHORIZED, code: CODE_UNAUTHENTICATED, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, code: CODE_INTERNAL, message: message.into() }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let status = match &e {
            ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Cancelled => {
                StatusCode::from_u16(CLIENT_CLOSED_REQUEST).unwrap_or(StatusCode::REQUEST_TIMEOUT)
            }
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, code: e.code(), message: e.to_string() }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        if e.is_unauthenticated() {
            return Self::unauthenticated(e.to_string());
        }
        match &e {
            AuthError::Validation(_) => Self::invalid_argument(e.to_string()),
            _ => Self::internal(e.to_string()),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, message = %self.message, "request failed");
        }
        let body = ErrorBody { code: self.code, message: &self.message, details: Vec::new() };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("catalog could not be loaded: {0}")]
    Catalog(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_http_statuses() {
        let cases = [
            (ServiceError::invalid("x"), 400, 3),
            (ServiceError::service_not_found("svc-9"), 404, 5),
            (ServiceError::Cancelled, 499, 1),
            (ServiceError::Internal("boom".into()), 500, 13),
        ];
        for (err, status, code) in cases {
            let api = JsonApiError::from(err);
            assert_eq!(api.status.as_u16(), status);
            assert_eq!(api.code, code);
        }
    }

    #[test]
    fn auth_errors_map_to_unauthenticated() {
        let api = JsonApiError::from(AuthError::Unauthorized);
        assert_eq!(api.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api.code, 16);
        assert_eq!(JsonApiError::from(AuthError::InvalidToken("expired".into())).code, 16);
        assert_eq!(JsonApiError::from(AuthError::Validation("x".into())).status, StatusCode::BAD_REQUEST);
        assert_eq!(JsonApiError::from(AuthError::TokenError("x".into())).status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn body_carries_empty_details() {
        let body = ErrorBody { code: 5, message: "service not found: x", details: Vec::new() };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"code": 5, "message": "service not found: x", "details": []}));
    }
}
