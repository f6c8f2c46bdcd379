use std::sync::Arc;

use crate::catalog::query::{ServiceFilter, SortSpec};
use crate::catalog::request::{
    GetServiceRequest, GetServiceResponse, GetServiceVersionsRequest, GetServiceVersionsResponse,
    ListServicesRequest, ListServicesResponse,
};
use crate::catalog::store::CatalogRepository;
use crate::catalog::validation::ValidationPolicy;
use crate::catalog::wire::{versions_to_wire, ServiceView};
use crate::context::CallContext;
use crate::errors::ServiceError;
use crate::pagination::{decode_page_token, effective_page_size, page_window};

/// Query engine over a read-only catalog.
///
/// Every operation is a synchronous computation over the shared repository;
/// one instance serves any number of concurrent callers. Nothing here logs or
/// records metrics, transports wrap these calls for that.
pub struct CatalogService<R: CatalogRepository> {
    repo: Arc<R>,
    policy: ValidationPolicy,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self::with_policy(repo, ValidationPolicy::default()) }

    pub fn with_policy(repo: Arc<R>, policy: ValidationPolicy) -> Self { Self { repo, policy } }

    pub fn policy(&self) -> ValidationPolicy { self.policy }

    /// Validate, filter, sort, paginate, convert; in that order.
    pub fn list_services(
        &self,
        ctx: &CallContext,
        req: &ListServicesRequest,
    ) -> Result<ListServicesResponse, ServiceError> {
        ctx.check()?;
        self.policy.validate_list(req)?;

        let mut services = self.repo.all_services();
        ServiceFilter::from_request(req).apply(&mut services);
        SortSpec::from_request(req).apply(&mut services);

        let page_size = effective_page_size(req.page_size);
        let offset = decode_page_token(&req.page_token, services.len())?;
        let window = page_window(services.len(), offset, page_size);

        let total_count = i32::try_from(window.total_count)
            .map_err(|_| ServiceError::Internal(format!("result of {} services overflows total_count", window.total_count)))?;
        Ok(ListServicesResponse {
            services: services[window.range].iter().map(|s| ServiceView::from(s.as_ref())).collect(),
            next_page_token: window.next_page_token,
            total_count,
        })
    }

    pub fn get_service(
        &self,
        ctx: &CallContext,
        req: &GetServiceRequest,
    ) -> Result<GetServiceResponse, ServiceError> {
        ctx.check()?;
        self.policy.validate_get(req)?;
        let svc = self.repo.by_id(&req.id)?;
        Ok(GetServiceResponse { service: ServiceView::from(svc.as_ref()) })
    }

    /// Versions in store order; not paginated.
    pub fn get_service_versions(
        &self,
        ctx: &CallContext,
        req: &GetServiceVersionsRequest,
    ) -> Result<GetServiceVersionsResponse, ServiceError> {
        ctx.check()?;
        self.policy.validate_get_versions(req)?;
        let svc = self.repo.by_id(&req.service_id)?;
        Ok(GetServiceVersionsResponse { versions: versions_to_wire(&svc.versions) })
    }
}
