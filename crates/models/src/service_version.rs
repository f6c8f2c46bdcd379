use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One release of a [`crate::Service`].
///
/// Any number of versions of a service may be active at once, including none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceVersion {
    pub id: String,
    /// Free-form label, usually a semantic version.
    pub version: String,
    pub service_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
