use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::service_version::ServiceVersion;

/// One cataloged service as described in the services document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Store order; no ordering is implied.
    #[serde(default)]
    pub versions: Vec<ServiceVersion>,
}
