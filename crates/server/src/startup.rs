use std::net::SocketAddr;
use std::sync::Arc;

use configs::AppConfig;
use service::auth::repository::InMemoryCredentialRepository;
use service::auth::{AuthService, JwtManager};
use service::catalog::{CatalogRepository, CatalogService, CatalogStore, ValidationPolicy};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::cors::build_cors;
use crate::errors::StartupError;
use crate::grpc::serve_grpc;
use crate::metrics::Metrics;
use crate::routes;
use crate::state::AppState;

/// Load the catalog and wire up auth and metrics from configuration.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let path = common::env::ensure_file(&cfg.catalog.data_file).await?;
    let file = models::load_services_file(&path)
        .await
        .map_err(|e| StartupError::Catalog(e.to_string()))?;
    let store = CatalogStore::from_file(file).map_err(|e| StartupError::Catalog(e.to_string()))?;
    info!(path = %path.display(), services = store.len(), "catalog loaded");

    let policy = ValidationPolicy::parse(&cfg.catalog.validation)
        .ok_or_else(|| StartupError::InvalidConfig(format!("unknown validation policy {:?}", cfg.catalog.validation)))?;
    let catalog = CatalogService::with_policy(Arc::new(store), policy);

    let auth = if cfg.auth.enabled {
        let duration = cfg.auth.token_duration().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        let jwt = JwtManager::new(&cfg.auth.jwt_secret, duration);
        let repo = InMemoryCredentialRepository::demo().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        info!(accounts = repo.len(), token_duration_secs = duration.as_secs(), "authentication enabled");
        Some(AuthService::new(Arc::new(repo), Arc::new(jwt)))
    } else {
        warn!("authentication disabled; catalog routes are public");
        None
    };

    let metrics = Metrics::new().map_err(|e| StartupError::InvalidConfig(format!("metrics: {e}")))?;
    Ok(AppState::new(catalog, auth, metrics))
}

/// Resolve when Ctrl+C or SIGTERM arrives.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl_c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

async fn stopped(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

/// Serve HTTP and gRPC until a shutdown signal arrives, then drain both.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let cors = build_cors(&cfg.cors.origins)?;
    let app = routes::build_router(state.clone(), cors);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let grpc_addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.grpc_port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    let grpc_listener = TcpListener::bind(grpc_addr).await?;
    info!(%addr, %grpc_addr, environment = %cfg.environment, "catalog server listening");

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = stop_tx.send(true);
    });

    let http = async {
        axum::serve(listener, app)
            .with_graceful_shutdown(stopped(stop_rx.clone()))
            .await
            .map_err(anyhow::Error::from)
    };
    let rpc = async {
        serve_grpc(state, grpc_listener, stopped(stop_rx.clone()))
            .await
            .map_err(anyhow::Error::from)
    };
    tokio::try_join!(http, rpc)?;
    info!("server stopped");
    Ok(())
}
