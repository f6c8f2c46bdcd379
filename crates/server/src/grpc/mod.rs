//! `catalog.v1.CatalogService` over gRPC, sharing state and metrics with the HTTP routes.

pub mod proto;

use std::future::Future;
use std::sync::Arc;
use std::time::SystemTime;

use service::auth::{extract_bearer_token, AuthError};
use service::catalog::{
    GetServiceRequest, GetServiceVersionsRequest, GetServiceVersionsResponse, ListServicesResponse,
};
use service::ServiceError;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codegen::InterceptedService;
use tonic::service::Interceptor;
use tonic::{Code, Request, Response, Status};
use tracing::{debug, warn};

use crate::dispatch::dispatch;
use crate::state::{AppState, Auth};
use proto::catalog_service_server::{CatalogService, CatalogServiceServer};

pub type GrpcService = InterceptedService<CatalogServiceServer<CatalogRpc>, BearerInterceptor>;

/// RPC status for a catalog failure; the message keeps its kind prefix.
pub fn status_from(e: ServiceError) -> Status {
    let code = match &e {
        ServiceError::InvalidArgument(_) => Code::InvalidArgument,
        ServiceError::NotFound(_) => Code::NotFound,
        ServiceError::Cancelled => Code::Cancelled,
        ServiceError::Internal(_) => Code::Internal,
    };
    Status::new(code, e.to_string())
}

fn auth_status(e: AuthError) -> Status {
    if e.is_unauthenticated() {
        Status::unauthenticated(format!("unauthenticated: {e}"))
    } else {
        Status::internal(e.to_string())
    }
}

/// Requires `authorization: Bearer <jwt>` metadata on every call when auth is on.
/// Verified claims are stored in the request extensions.
#[derive(Clone)]
pub struct BearerInterceptor {
    auth: Option<Arc<Auth>>,
}

impl Interceptor for BearerInterceptor {
    fn call(&mut self, mut req: Request<()>) -> Result<Request<()>, Status> {
        let Some(auth) = self.auth.as_ref() else {
            return Ok(req);
        };
        let header_value = req
            .metadata()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let claims = extract_bearer_token(header_value)
            .and_then(|token| auth.jwt().validate_token(token))
            .map_err(|e| {
                warn!(error = %e, "rejected unauthenticated rpc");
                auth_status(e)
            })?;
        req.extensions_mut().insert(claims);
        Ok(req)
    }
}

pub struct CatalogRpc {
    state: AppState,
}

#[tonic::async_trait]
impl CatalogService for CatalogRpc {
    async fn list_services(
        &self,
        request: Request<proto::ListServicesRequest>,
    ) -> Result<Response<proto::ListServicesResponse>, Status> {
        let req: service::catalog::ListServicesRequest = request.into_inner().into();
        debug!(request = ?req, "ListServices rpc");
        let resp = dispatch(&self.state, "ListServices", |r: &ListServicesResponse| r.services.len(), move |catalog, ctx| {
            catalog.list_services(ctx, &req)
        })
        .await
        .map_err(status_from)?;
        Ok(Response::new(resp.into()))
    }

    async fn get_service(
        &self,
        request: Request<proto::GetServiceRequest>,
    ) -> Result<Response<proto::GetServiceResponse>, Status> {
        let req = GetServiceRequest { id: request.into_inner().id };
        debug!(id = %req.id, "GetService rpc");
        let resp = dispatch(&self.state, "GetService", |_| 1, move |catalog, ctx| catalog.get_service(ctx, &req))
            .await
            .map_err(status_from)?;
        Ok(Response::new(resp.into()))
    }

    async fn get_service_versions(
        &self,
        request: Request<proto::GetServiceVersionsRequest>,
    ) -> Result<Response<proto::GetServiceVersionsResponse>, Status> {
        let req = GetServiceVersionsRequest { service_id: request.into_inner().service_id };
        debug!(service_id = %req.service_id, "GetServiceVersions rpc");
        let resp = dispatch(&self.state, "GetServiceVersions", |r: &GetServiceVersionsResponse| r.versions.len(), move |catalog, ctx| {
            catalog.get_service_versions(ctx, &req)
        })
        .await
        .map_err(status_from)?;
        Ok(Response::new(resp.into()))
    }

    async fn health_check(
        &self,
        _request: Request<proto::HealthCheckRequest>,
    ) -> Result<Response<proto::HealthCheckResponse>, Status> {
        Ok(Response::new(proto::HealthCheckResponse {
            status: "OK".to_string(),
            timestamp: Some(SystemTime::now().into()),
        }))
    }
}

/// The catalog RPC service behind the bearer interceptor.
pub fn build_grpc_service(state: AppState) -> GrpcService {
    let interceptor = BearerInterceptor { auth: state.auth.clone() };
    CatalogServiceServer::with_interceptor(CatalogRpc { state }, interceptor)
}

/// Serve gRPC on `listener` until `shutdown` resolves.
pub async fn serve_grpc<F>(state: AppState, listener: TcpListener, shutdown: F) -> Result<(), tonic::transport::Error>
where
    F: Future<Output = ()>,
{
    tonic::transport::Server::builder()
        .add_service(build_grpc_service(state))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}
