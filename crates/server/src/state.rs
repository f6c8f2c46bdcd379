use std::sync::Arc;

use service::auth::repository::InMemoryCredentialRepository;
use service::auth::AuthService;
use service::{CatalogService, CatalogStore};

use crate::metrics::Metrics;

pub type Catalog = CatalogService<CatalogStore>;
pub type Auth = AuthService<InMemoryCredentialRepository>;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// `None` when authentication is disabled.
    pub auth: Option<Arc<Auth>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(catalog: Catalog, auth: Option<Auth>, metrics: Metrics) -> Self {
        Self { catalog: Arc::new(catalog), auth: auth.map(Arc::new), metrics: Arc::new(metrics) }
    }

    pub fn auth_enabled(&self) -> bool { self.auth.is_some() }
}
