//! Filtering and ordering steps of the list operation.

use std::cmp::Ordering;
use std::sync::Arc;

use models::Service;

use crate::catalog::request::ListServicesRequest;

/// Conjunction of the organization and free-text criteria.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceFilter {
    organization_id: String,
    /// Trimmed and lowercased.
    query: String,
}

impl ServiceFilter {
    pub fn new(organization_id: &str, search_query: &str) -> Self {
        Self {
            organization_id: organization_id.to_string(),
            query: search_query.trim().to_lowercase(),
        }
    }

    pub fn from_request(req: &ListServicesRequest) -> Self {
        Self::new(&req.organization_id, &req.search_query)
    }

    pub fn matches(&self, svc: &Service) -> bool {
        if !self.organization_id.is_empty() && svc.organization_id != self.organization_id {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        svc.name.to_lowercase().contains(&self.query)
            || svc.description.to_lowercase().contains(&self.query)
    }

    pub fn apply(&self, services: &mut Vec<Arc<Service>>) {
        services.retain(|s| self.matches(s));
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Name,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Unknown or empty names fall back to `Name`.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "name" => SortField::Name,
            "created_at" => SortField::CreatedAt,
            "updated_at" => SortField::UpdatedAt,
            _ => SortField::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Unknown or empty names fall back to `Asc`.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn from_request(req: &ListServicesRequest) -> Self {
        Self {
            field: SortField::parse_or_default(&req.sort_by),
            order: SortOrder::parse_or_default(&req.sort_order),
        }
    }

    /// Primary key in the requested direction, then id ascending.
    pub fn compare(&self, a: &Service, b: &Service) -> Ordering {
        let primary = match self.field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        let primary = match self.order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    pub fn apply(&self, services: &mut [Arc<Service>]) {
        services.sort_by(|a, b| self.compare(a, b));
    }
}
