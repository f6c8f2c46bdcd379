use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of the `/health` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Health {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub version: String,
    pub auth_enabled: bool,
}

impl Health {
    pub fn healthy(service: &str, version: &str, auth_enabled: bool) -> Self {
        Self::at(Utc::now(), service, version, auth_enabled)
    }

    pub fn at(now: DateTime<Utc>, service: &str, version: &str, auth_enabled: bool) -> Self {
        Self {
            status: "healthy".into(),
            service: service.into(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            version: version.into(),
            auth_enabled,
        }
    }
}
