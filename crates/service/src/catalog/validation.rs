//! Per-operation request checks.
//!
//! `Minimal` only enforces the page-size bound and required ids. `Extended`
//! additionally bounds the search query and requires identifiers to be
//! `[A-Za-z0-9_-]{1,50}`.

use crate::catalog::request::{GetServiceRequest, GetServiceVersionsRequest, ListServicesRequest};
use crate::errors::ServiceError;
use crate::pagination::MAX_PAGE_SIZE;

pub const MAX_SEARCH_QUERY_LEN: usize = 100;
pub const MAX_IDENTIFIER_LEN: usize = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    Minimal,
    #[default]
    Extended,
}

impl ValidationPolicy {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => Some(ValidationPolicy::Minimal),
            "extended" => Some(ValidationPolicy::Extended),
            _ => None,
        }
    }

    fn is_extended(self) -> bool { self == ValidationPolicy::Extended }

    pub fn validate_list(self, req: &ListServicesRequest) -> Result<(), ServiceError> {
        if req.page_size < 0 || req.page_size > MAX_PAGE_SIZE {
            return Err(ServiceError::invalid(format!(
                "page_size must be between 0 and {MAX_PAGE_SIZE}, got {}",
                req.page_size
            )));
        }
        if !self.is_extended() {
            return Ok(());
        }
        if req.search_query.chars().count() > MAX_SEARCH_QUERY_LEN {
            return Err(ServiceError::invalid(format!(
                "search_query must be at most {MAX_SEARCH_QUERY_LEN} characters"
            )));
        }
        if !req.organization_id.is_empty() && !is_valid_identifier(&req.organization_id) {
            return Err(ServiceError::invalid(format!(
                "invalid organization_id format: {:?}",
                req.organization_id
            )));
        }
        Ok(())
    }

    pub fn validate_get(self, req: &GetServiceRequest) -> Result<(), ServiceError> {
        self.validate_service_id(&req.id)
    }

    pub fn validate_get_versions(self, req: &GetServiceVersionsRequest) -> Result<(), ServiceError> {
        self.validate_service_id(&req.service_id)
    }

    fn validate_service_id(self, id: &str) -> Result<(), ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::invalid("service ID is required"));
        }
        if self.is_extended() && !is_valid_identifier(id) {
            return Err(ServiceError::invalid(format!("invalid service ID format: {id:?}")));
        }
        Ok(())
    }
}

/// Letters, digits, `-` and `_`; 1 to 50 characters.
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_IDENTIFIER_LEN
        && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(page_size: i32) -> ListServicesRequest {
        ListServicesRequest { page_size, ..Default::default() }
    }

    #[test]
    fn page_size_bounds_apply_to_both_policies() {
        for policy in [ValidationPolicy::Minimal, ValidationPolicy::Extended] {
            for ok in [0, 1, 50, 100] {
                assert!(policy.validate_list(&list(ok)).is_ok(), "{policy:?} {ok}");
            }
            for bad in [-1, 101, 150, i32::MIN, i32::MAX] {
                let err = policy.validate_list(&list(bad)).unwrap_err();
                assert!(matches!(err, ServiceError::InvalidArgument(_)));
                assert!(err.to_string().contains("page_size must be between 0 and 100"), "{err}");
            }
        }
    }

    #[test]
    fn long_search_query_only_rejected_when_extended() {
        let req = ListServicesRequest { search_query: "q".repeat(101), ..Default::default() };
        assert!(ValidationPolicy::Minimal.validate_list(&req).is_ok());
        let err = ValidationPolicy::Extended.validate_list(&req).unwrap_err();
        assert!(err.to_string().contains("search_query must be at most 100"));

        let at_limit = ListServicesRequest { search_query: "é".repeat(100), ..Default::default() };
        assert!(ValidationPolicy::Extended.validate_list(&at_limit).is_ok());
    }

    #[test]
    fn organization_id_format() {
        let req = ListServicesRequest { organization_id: "org@1".into(), ..Default::default() };
        assert!(ValidationPolicy::Minimal.validate_list(&req).is_ok());
        assert!(ValidationPolicy::Extended.validate_list(&req).is_err());

        let req = ListServicesRequest { organization_id: "org_1-A".into(), ..Default::default() };
        assert!(ValidationPolicy::Extended.validate_list(&req).is_ok());
    }

    #[test]
    fn empty_id_is_invalid_argument_not_not_found() {
        for policy in [ValidationPolicy::Minimal, ValidationPolicy::Extended] {
            let err = policy.validate_get(&GetServiceRequest { id: String::new() }).unwrap_err();
            assert_eq!(err, ServiceError::invalid("service ID is required"));
            let err = policy
                .validate_get_versions(&GetServiceVersionsRequest { service_id: String::new() })
                .unwrap_err();
            assert_eq!(err, ServiceError::invalid("service ID is required"));
        }
    }

    #[test]
    fn malformed_ids_rejected_only_when_extended() {
        let req = GetServiceRequest { id: "svc@1".into() };
        assert!(ValidationPolicy::Minimal.validate_get(&req).is_ok());
        let err = ValidationPolicy::Extended.validate_get(&req).unwrap_err();
        assert!(err.to_string().contains("invalid service ID format"));

        let req = GetServiceVersionsRequest { service_id: "x".repeat(51) };
        assert!(ValidationPolicy::Extended.validate_get_versions(&req).is_err());
    }

    #[test]
    fn identifier_rule() {
        assert!(is_valid_identifier("svc-1"));
        assert!(is_valid_identifier("does-not-exist"));
        assert!(is_valid_identifier(&"a".repeat(50)));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier(&"a".repeat(51)));
        assert!(!is_valid_identifier("svc 1"));
        assert!(!is_valid_identifier("svc/1"));
        assert!(!is_valid_identifier("sérvice"));
    }

    #[test]
    fn parse_policy_names() {
        assert_eq!(ValidationPolicy::parse("Extended"), Some(ValidationPolicy::Extended));
        assert_eq!(ValidationPolicy::parse("minimal"), Some(ValidationPolicy::Minimal));
        assert_eq!(ValidationPolicy::parse("strict"), None);
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Extended);
    }
}
