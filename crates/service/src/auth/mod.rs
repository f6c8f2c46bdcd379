//! Bearer-token authentication: domain, repository, service, plus the JWT codec
//! the transports use to verify incoming requests.

pub mod domain;
pub mod errors;
pub mod jwt;
pub mod repository;
pub mod service;

pub use errors::AuthError;
pub use jwt::{extract_bearer_token, generate_secret_key, JwtManager};
pub use service::AuthService;
