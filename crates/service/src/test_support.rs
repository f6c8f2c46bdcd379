#![cfg(test)]
use chrono::{DateTime, TimeZone, Utc};
use models::{Service, ServiceVersion};

fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).single().unwrap_or_default()
}

fn version(
    id: &str,
    label: &str,
    service_id: &str,
    description: &str,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> ServiceVersion {
    ServiceVersion {
        id: id.into(),
        version: label.into(),
        service_id: service_id.into(),
        description: description.into(),
        is_active,
        created_at,
        updated_at,
    }
}

/// The four services of the sample catalog.
pub fn fixture_services() -> Vec<Service> {
    vec![
        Service {
            id: "svc-1".into(),
            name: "User Service".into(),
            description: "Handles user authentication and profile management".into(),
            organization_id: "org-1".into(),
            url: "https://services.example.com/user".into(),
            created_at: at(2024, 5, 1, 10),
            updated_at: at(2025, 8, 1, 9),
            versions: vec![
                version("v1", "v1.0.0", "svc-1", "Initial stable release", false, at(2024, 5, 1, 10), at(2024, 6, 1, 10)),
                version("v2", "v1.1.0", "svc-1", "Added OAuth support", true, at(2024, 7, 1, 10), at(2025, 8, 1, 9)),
            ],
        },
        Service {
            id: "svc-2".into(),
            name: "Payment Gateway".into(),
            description: "Facilitates payments and transaction management".into(),
            organization_id: "org-2".into(),
            url: "https://services.example.com/payment".into(),
            created_at: at(2023, 12, 15, 8),
            updated_at: at(2025, 8, 1, 8),
            versions: vec![version(
                "v1", "v2.0.0", "svc-2", "Supports Stripe and Razorpay", true, at(2024, 1, 1, 0), at(2024, 6, 15, 0),
            )],
        },
        Service {
            id: "svc-3".into(),
            name: "Inventory Service".into(),
            description: "Tracks product availability and stock levels".into(),
            organization_id: "org-1".into(),
            url: "https://services.example.com/inventory".into(),
            created_at: at(2022, 11, 1, 12),
            updated_at: at(2025, 7, 31, 12),
            versions: vec![
                version("v1", "v1.0.0", "svc-3", "Initial version", false, at(2022, 11, 1, 12), at(2023, 1, 1, 12)),
                version("v2", "v2.0.0", "svc-3", "Optimized warehouse sync", true, at(2024, 3, 1, 12), at(2025, 7, 31, 12)),
            ],
        },
        Service {
            id: "svc-4".into(),
            name: "Analytics Service".into(),
            description: "Generates usage and engagement reports".into(),
            organization_id: "org-3".into(),
            url: "https://services.example.com/analytics".into(),
            created_at: at(2024, 1, 10, 14),
            updated_at: at(2025, 7, 1, 14),
            versions: vec![version(
                "v1", "v0.1.0", "svc-4", "Beta release", false, at(2024, 1, 10, 14), at(2025, 7, 1, 14),
            )],
        },
    ]
}

/// `n` versionless services named so that name order and id order agree.
pub fn many_services(n: usize) -> Vec<Service> {
    (0..n)
        .map(|i| Service {
            id: format!("gen-{i:04}"),
            name: format!("Generated {i:04}"),
            description: String::new(),
            organization_id: format!("org-{}", i % 3),
            url: String::new(),
            created_at: at(2024, 1, 1, 0) + chrono::Duration::hours(i as i64),
            updated_at: at(2025, 1, 1, 0),
            versions: Vec::new(),
        })
        .collect()
}
