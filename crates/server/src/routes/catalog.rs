use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use service::catalog::{
    GetServiceRequest, GetServiceResponse, GetServiceVersionsRequest, GetServiceVersionsResponse,
    ListServicesRequest, ListServicesResponse,
};
use service::ServiceError;
use tracing::debug;

use crate::errors::JsonApiError;
use crate::dispatch::{dispatch, record_failure};
use crate::state::AppState;

/// Query string of `GET /v1/services`; snake_case and lowerCamelCase both accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    #[serde(alias = "pageSize")]
    page_size: Option<String>,
    #[serde(alias = "pageToken")]
    page_token: Option<String>,
    #[serde(alias = "organizationId")]
    organization_id: Option<String>,
    #[serde(alias = "searchQuery")]
    search_query: Option<String>,
    #[serde(alias = "sortBy")]
    sort_by: Option<String>,
    #[serde(alias = "sortOrder")]
    sort_order: Option<String>,
}

impl ListQuery {
    fn into_request(self) -> Result<ListServicesRequest, ServiceError> {
        let page_size = match self.page_size.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|_| ServiceError::invalid(format!("page_size must be an integer, got {raw:?}")))?,
        };
        Ok(ListServicesRequest {
            page_size,
            page_token: self.page_token.unwrap_or_default(),
            organization_id: self.organization_id.unwrap_or_default(),
            search_query: self.search_query.unwrap_or_default(),
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
        })
    }
}

/// GET /v1/services
pub async fn list_services(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListServicesResponse>, JsonApiError> {
    let req = match query {
        Ok(Query(q)) => q.into_request(),
        Err(rejection) => Err(ServiceError::invalid(rejection.body_text())),
    };
    let req = match req {
        Ok(req) => req,
        Err(e) => {
            record_failure(&state, "ListServices", &e);
            return Err(e.into());
        }
    };
    debug!(request = ?req, "ListServices");
    dispatch(&state, "ListServices", |r: &ListServicesResponse| r.services.len(), move |catalog, ctx| {
        catalog.list_services(ctx, &req)
    })
    .await
    .map(Json)
    .map_err(Into::into)
}

/// GET /v1/services/:id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetServiceResponse>, JsonApiError> {
    let req = GetServiceRequest { id };
    debug!(id = %req.id, "GetService");
    dispatch(&state, "GetService", |_| 1, move |catalog, ctx| catalog.get_service(ctx, &req))
        .await
        .map(Json)
        .map_err(Into::into)
}

/// GET /v1/services/:id/versions
pub async fn get_service_versions(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<GetServiceVersionsResponse>, JsonApiError> {
    let req = GetServiceVersionsRequest { service_id };
    debug!(service_id = %req.service_id, "GetServiceVersions");
    dispatch(&state, "GetServiceVersions", |r: &GetServiceVersionsResponse| r.versions.len(), move |catalog, ctx| {
        catalog.get_service_versions(ctx, &req)
    })
    .await
    .map(Json)
    .map_err(Into::into)
}
