//! `catalog.v1` protobuf messages and the conversions to and from the catalog types.

use service::catalog::{self, ServiceView, Timestamp, VersionView};

include!(concat!(env!("OUT_DIR"), "/catalog.v1.CatalogService.rs"));

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListServicesRequest {
    #[prost(int32, tag = "1")]
    pub page_size: i32,
    #[prost(string, tag = "2")]
    pub page_token: String,
    #[prost(string, tag = "3")]
    pub organization_id: String,
    #[prost(string, tag = "4")]
    pub search_query: String,
    #[prost(string, tag = "5")]
    pub sort_by: String,
    #[prost(string, tag = "6")]
    pub sort_order: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListServicesResponse {
    #[prost(message, repeated, tag = "1")]
    pub services: Vec<Service>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
    #[prost(int32, tag = "3")]
    pub total_count: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServiceRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServiceResponse {
    #[prost(message, optional, tag = "1")]
    pub service: Option<Service>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServiceVersionsRequest {
    #[prost(string, tag = "1")]
    pub service_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServiceVersionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub versions: Vec<ServiceVersion>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct HealthCheckRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheckResponse {
    /// "OK" while the server is serving.
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Service {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub organization_id: String,
    #[prost(string, tag = "5")]
    pub url: String,
    #[prost(message, optional, tag = "6")]
    pub created_at: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub updated_at: Option<prost_types::Timestamp>,
    #[prost(message, repeated, tag = "8")]
    pub versions: Vec<ServiceVersion>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceVersion {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, tag = "3")]
    pub service_id: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(bool, tag = "5")]
    pub is_active: bool,
    #[prost(message, optional, tag = "6")]
    pub created_at: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub updated_at: Option<prost_types::Timestamp>,
}

fn timestamp(t: Timestamp) -> Option<prost_types::Timestamp> {
    Some(prost_types::Timestamp { seconds: t.seconds, nanos: t.nanos })
}

impl From<ListServicesRequest> for catalog::ListServicesRequest {
    fn from(r: ListServicesRequest) -> Self {
        Self {
            page_size: r.page_size,
            page_token: r.page_token,
            organization_id: r.organization_id,
            search_query: r.search_query,
            sort_by: r.sort_by,
            sort_order: r.sort_order,
        }
    }
}

impl From<VersionView> for ServiceVersion {
    fn from(v: VersionView) -> Self {
        Self {
            id: v.id,
            version: v.version,
            service_id: v.service_id,
            description: v.description,
            is_active: v.is_active,
            created_at: timestamp(v.created_at),
            updated_at: timestamp(v.updated_at),
        }
    }
}

impl From<ServiceView> for Service {
    fn from(s: ServiceView) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            organization_id: s.organization_id,
            url: s.url,
            created_at: timestamp(s.created_at),
            updated_at: timestamp(s.updated_at),
            versions: s.versions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<catalog::ListServicesResponse> for ListServicesResponse {
    fn from(r: catalog::ListServicesResponse) -> Self {
        Self {
            services: r.services.into_iter().map(Into::into).collect(),
            next_page_token: r.next_page_token,
            total_count: r.total_count,
        }
    }
}

impl From<catalog::GetServiceResponse> for GetServiceResponse {
    fn from(r: catalog::GetServiceResponse) -> Self { Self { service: Some(r.service.into()) } }
}

impl From<catalog::GetServiceVersionsResponse> for GetServiceVersionsResponse {
    fn from(r: catalog::GetServiceVersionsResponse) -> Self {
        Self { versions: r.versions.into_iter().map(Into::into).collect() }
    }
}
