use thiserror::Error;

/// Per-request failure classes. Messages carry a stable prefix per kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    InvalidArgument(String),
    #[error("service not found: {0}")]
    NotFound(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn invalid(msg: impl Into<String>) -> Self { Self::InvalidArgument(msg.into()) }

    pub fn service_not_found(id: &str) -> Self {
        Self::NotFound(format!("service with ID '{id}' not found"))
    }

    /// Stable numeric code, numbered like RPC status codes.
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Cancelled => 1,
            ServiceError::InvalidArgument(_) => 3,
            ServiceError::NotFound(_) => 5,
            ServiceError::Internal(_) => 13,
        }
    }

    /// Label used in logs and metrics.
    pub fn code_name(&self) -> &'static str {
        match self {
            ServiceError::Cancelled => "Canceled",
            ServiceError::InvalidArgument(_) => "InvalidArgument",
            ServiceError::NotFound(_) => "NotFound",
            ServiceError::Internal(_) => "Internal",
        }
    }
}

impl From<models::ModelError> for ServiceError {
    fn from(e: models::ModelError) -> Self { ServiceError::Internal(e.to_string()) }
}
