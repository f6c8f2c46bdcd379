use serde::{Deserialize, Serialize};

use crate::catalog::wire::{ServiceView, VersionView};

/// Parameters of a list call. Empty strings mean "not set".
///
/// `page_token` must come from a previous response produced with the same
/// `organization_id`, `search_query`, `sort_by` and `sort_order`; it encodes a
/// position in that specific result and means nothing under other filters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListServicesRequest {
    /// `0` selects the default of 10; valid range is `0..=100`.
    pub page_size: i32,
    pub page_token: String,
    pub organization_id: String,
    pub search_query: String,
    /// `name`, `created_at` or `updated_at`; anything else sorts by name.
    pub sort_by: String,
    /// `asc` or `desc`; anything else sorts ascending.
    pub sort_order: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetServiceRequest {
    pub id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetServiceVersionsRequest {
    pub service_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesResponse {
    pub services: Vec<ServiceView>,
    /// Empty on the last page.
    pub next_page_token: String,
    /// Matches after filtering, before pagination.
    pub total_count: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetServiceResponse {
    pub service: ServiceView,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetServiceVersionsResponse {
    pub versions: Vec<VersionView>,
}
