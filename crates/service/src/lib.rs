//! Service layer for the catalog.
//! - `catalog`: the read-only query engine over the loaded services document.
//! - `auth`: bearer-token issuance and verification used by the transports.
//! - Request-scoped errors are classified by [`errors::ServiceError`].

pub mod errors;
pub mod context;
pub mod pagination;
pub mod catalog;
pub mod auth;
#[cfg(test)]
pub mod test_support;

pub use catalog::{CatalogService, CatalogStore};
pub use context::CallContext;
pub use errors::ServiceError;
