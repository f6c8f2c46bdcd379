use std::collections::HashMap;
use std::sync::Arc;

use models::{Service, ServicesFile};

use crate::errors::ServiceError;

/// Read access to the loaded catalog.
pub trait CatalogRepository: Send + Sync {
    /// Every service. Enumeration order is unspecified; callers sort.
    fn all_services(&self) -> Vec<Arc<Service>>;
    fn by_id(&self, id: &str) -> Result<Arc<Service>, ServiceError>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Immutable in-memory catalog keyed by service id.
///
/// Never mutated after construction, so any number of readers may share it
/// through an `Arc` without locking.
#[derive(Debug, Default)]
pub struct CatalogStore {
    services: HashMap<String, Arc<Service>>,
}

impl CatalogStore {
    /// Build from an already validated document.
    pub fn from_file(file: ServicesFile) -> Result<Self, ServiceError> {
        file.validate()?;
        Ok(Self::from_services(file.services))
    }

    /// Later duplicates replace earlier ones; use [`CatalogStore::from_file`] to reject them.
    pub fn from_services(services: Vec<Service>) -> Self {
        let services = services.into_iter().map(|s| (s.id.clone(), Arc::new(s))).collect();
        Self { services }
    }
}

impl CatalogRepository for CatalogStore {
    fn all_services(&self) -> Vec<Arc<Service>> {
        self.services.values().cloned().collect()
    }

    fn by_id(&self, id: &str) -> Result<Arc<Service>, ServiceError> {
        self.services.get(id).cloned().ok_or_else(|| ServiceError::service_not_found(id))
    }

    fn len(&self) -> usize { self.services.len() }
}
