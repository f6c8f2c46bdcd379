//! Catalog domain records and the YAML document they are loaded from.

pub mod errors;
pub mod service;
pub mod service_version;
pub mod services_file;

pub use errors::ModelError;
pub use service::Service;
pub use service_version::ServiceVersion;
pub use services_file::{load_services_file, ServicesFile};
