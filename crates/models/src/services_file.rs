use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ModelError;
use crate::service::Service;

/// Top-level shape of the services document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicesFile {
    #[serde(default)]
    pub services: Vec<Service>,
}

impl ServicesFile {
    /// Parse and validate a YAML document. Any malformed field fails the whole document.
    pub fn from_yaml_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let file: ServicesFile =
            serde_yaml::from_slice(bytes).map_err(|e| ModelError::Parse(e.to_string()))?;
        file.validate()?;
        Ok(file)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ModelError> {
        Self::from_yaml_slice(s.as_bytes())
    }

    /// Service ids are non-empty and unique; each version points back at its parent.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::with_capacity(self.services.len());
        for svc in &self.services {
            if svc.id.trim().is_empty() {
                return Err(ModelError::Validation(format!("service {:?} has an empty id", svc.name)));
            }
            if !seen.insert(svc.id.as_str()) {
                return Err(ModelError::Validation(format!("duplicate service id '{}'", svc.id)));
            }
            for v in &svc.versions {
                if v.service_id != svc.id {
                    return Err(ModelError::Validation(format!(
                        "version '{}' of service '{}' names service_id '{}'",
                        v.id, svc.id, v.service_id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Read, parse and validate the services document at `path`.
pub async fn load_services_file(path: impl AsRef<Path>) -> Result<ServicesFile, ModelError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let file = ServicesFile::from_yaml_slice(&bytes)?;
    info!(path = %path.display(), services = file.services.len(), "services document loaded");
    Ok(file)
}
