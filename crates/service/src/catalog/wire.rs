//! External record shapes and the pure conversions that produce them.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use models::{Service, ServiceVersion};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire timestamp: whole seconds since the Unix epoch plus nanoseconds.
/// Serialized as an RFC3339 UTC string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        u32::try_from(self.nanos).ok().and_then(|n| DateTime::from_timestamp(self.seconds, n))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(t: DateTime<Utc>) -> Self {
        // timestamp_subsec_nanos() < 2e9 always fits in i32
        Self { seconds: t.timestamp(), nanos: t.timestamp_subsec_nanos() as i32 }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => write!(f, "{}s+{}ns", self.seconds, self.nanos),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Timestamp::from(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub organization_id: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub versions: Vec<VersionView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionView {
    pub id: String,
    pub version: String,
    pub service_id: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&ServiceVersion> for VersionView {
    fn from(v: &ServiceVersion) -> Self {
        Self {
            id: v.id.clone(),
            version: v.version.clone(),
            service_id: v.service_id.clone(),
            description: v.description.clone(),
            is_active: v.is_active,
            created_at: v.created_at.into(),
            updated_at: v.updated_at.into(),
        }
    }
}

impl From<&Service> for ServiceView {
    fn from(s: &Service) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            description: s.description.clone(),
            organization_id: s.organization_id.clone(),
            url: s.url.clone(),
            created_at: s.created_at.into(),
            updated_at: s.updated_at.into(),
            versions: versions_to_wire(&s.versions),
        }
    }
}

/// Converts in store order.
pub fn versions_to_wire(versions: &[ServiceVersion]) -> Vec<VersionView> {
    versions.iter().map(VersionView::from).collect()
}
