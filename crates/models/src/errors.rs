use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("failed to parse services document: {0}")]
    Parse(String),
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}
