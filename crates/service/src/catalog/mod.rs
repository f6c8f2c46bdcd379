//! Read-only catalog: store, request validation, filtering, ordering,
//! pagination and conversion to the wire shape.

pub mod store;
pub mod validation;
pub mod request;
pub mod query;
pub mod wire;
pub mod service;

pub use request::{
    GetServiceRequest, GetServiceResponse, GetServiceVersionsRequest, GetServiceVersionsResponse,
    ListServicesRequest, ListServicesResponse,
};
pub use service::CatalogService;
pub use store::{CatalogRepository, CatalogStore};
pub use validation::ValidationPolicy;
pub use wire::{ServiceView, Timestamp, VersionView};
