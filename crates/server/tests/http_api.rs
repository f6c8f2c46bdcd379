use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::metrics::Metrics;
use server::{build_router, build_state, AppState};
use service::auth::repository::InMemoryCredentialRepository;
use service::auth::{AuthService, JwtManager};
use service::catalog::{CatalogService, CatalogStore};

const DATA_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/services.yaml");

fn store() -> CatalogStore {
    let text = std::fs::read_to_string(DATA_FILE).expect("read sample catalog");
    let file = models::ServicesFile::from_yaml_str(&text).expect("parse sample catalog");
    CatalogStore::from_file(file).expect("valid sample catalog")
}

fn cors() -> tower_http::cors::CorsLayer {
    server::cors::build_cors(&["*".to_string()]).expect("cors")
}

fn open_app() -> Router {
    let state = AppState::new(CatalogService::new(Arc::new(store())), None, Metrics::new().unwrap());
    build_router(state, cors())
}

fn secured_app() -> Router {
    let repo = InMemoryCredentialRepository::default()
        .with_user("admin@org1.com", "admin123", "org-1", "admin")
        .unwrap();
    let jwt = JwtManager::new("test-secret", Duration::from_secs(600));
    let auth = AuthService::new(Arc::new(repo), Arc::new(jwt));
    let state = AppState::new(CatalogService::new(Arc::new(store())), Some(auth), Metrics::new().unwrap());
    build_router(state, cors())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn names(body: &Value) -> Vec<String> {
    body["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_public_and_reports_auth_mode() {
    let (status, body) = get(&open_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "catalog-service");
    assert_eq!(body["auth_enabled"], false);

    let (status, body) = get(&secured_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["auth_enabled"], true);
}

#[tokio::test]
async fn list_defaults_to_name_order() {
    let (status, body) = get(&open_app(), "/v1/services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Analytics Service", "Inventory Service", "Payment Gateway", "User Service"]);
    assert_eq!(body["totalCount"], 4);
    assert_eq!(body["nextPageToken"], "");
}

#[tokio::test]
async fn list_pages_follow_tokens() {
    let app = open_app();
    let (_, first) = get(&app, "/v1/services?page_size=3&sort_by=created_at&sort_order=desc").await;
    let ids: Vec<&str> = first["services"].as_array().unwrap().iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["svc-1", "svc-4", "svc-2"]);
    assert_eq!(first["nextPageToken"], "page_3");

    let (status, second) =
        get(&app, "/v1/services?pageSize=3&pageToken=page_3&sortBy=created_at&sortOrder=desc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["services"][0]["id"], "svc-3");
    assert_eq!(second["nextPageToken"], "");
    assert_eq!(second["totalCount"], 4);
}

#[tokio::test]
async fn list_filters_by_org_and_search() {
    let app = open_app();
    let (_, body) = get(&app, "/v1/services?organization_id=org-1").await;
    assert_eq!(names(&body), vec!["Inventory Service", "User Service"]);

    let (_, body) = get(&app, "/v1/services?search_query=PAYMENTS").await;
    assert_eq!(names(&body), vec!["Payment Gateway"]);
    assert_eq!(body["totalCount"], 1);
}

#[tokio::test]
async fn list_rejects_bad_parameters() {
    let app = open_app();
    for uri in [
        "/v1/services?page_size=ten",
        "/v1/services?page_size=150",
        "/v1/services?page_size=-1",
        "/v1/services?page_token=invalid_token",
        "/v1/services?page_token=page_99",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 3, "{uri}");
        assert_eq!(body["details"], json!([]));
    }
}

#[tokio::test]
async fn get_service_and_versions() {
    let app = open_app();
    let (status, body) = get(&app, "/v1/services/svc-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"]["organizationId"], "org-1");
    assert_eq!(body["service"]["createdAt"], "2024-05-01T10:00:00Z");
    assert_eq!(body["service"]["url"], "https://services.example.com/user");

    let (status, body) = get(&app, "/v1/services/svc-3/versions").await;
    assert_eq!(status, StatusCode::OK);
    let versions = body["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0]["version"], "v1.0.0");
    assert_eq!(versions[1]["isActive"], true);
    assert_eq!(versions[1]["serviceId"], "svc-3");
}

#[tokio::test]
async fn unknown_service_is_not_found() {
    let app = open_app();
    for uri in ["/v1/services/does-not-exist", "/v1/services/does-not-exist/versions"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["code"], 5);
        assert!(body["message"].as_str().unwrap().contains("does-not-exist"));
    }
}

#[tokio::test]
async fn malformed_service_id_is_invalid_argument() {
    let (status, body) = get(&open_app(), "/v1/services/svc%401").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn metrics_count_outcomes() {
    let app = open_app();
    get(&app, "/v1/services").await;
    get(&app, "/v1/services/nope").await;

    let res = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();
    assert!(text.contains(r#"catalog_requests_total{method="ListServices",status="OK"} 1"#), "{text}");
    assert!(text.contains(r#"catalog_requests_total{method="GetService",status="NotFound"} 1"#), "{text}");
}

#[tokio::test]
async fn login_route_only_exists_with_auth() {
    let req = || {
        Request::builder()
            .method(Method::POST)
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email":"admin@org1.com","password":"admin123","organization":"org-1"}"#))
            .unwrap()
    };
    let (status, _) = send(&open_app(), req()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&secured_app(), req()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "user-admin@org1");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn secured_routes_require_a_valid_bearer_token() {
    let app = secured_app();

    let (status, body) = get(&app, "/v1/services").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 16);

    let bad = Request::builder()
        .uri("/v1/services")
        .header(header::AUTHORIZATION, "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();
    assert_eq!(send(&app, bad).await.0, StatusCode::UNAUTHORIZED);

    let login = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"admin@org1.com","password":"admin123","organization":"org-1"}"#))
        .unwrap();
    let (_, session) = send(&app, login).await;
    let token = session["token"].as_str().unwrap();

    let authed = Request::builder()
        .uri("/v1/services/svc-2")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, authed).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"]["name"], "Payment Gateway");
}

#[tokio::test]
async fn login_rejects_wrong_credentials() {
    let app = secured_app();
    let login = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"admin@org1.com","password":"admin123","organization":"org-2"}"#))
        .unwrap();
    let (status, body) = send(&app, login).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 16);

    let empty = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"admin@org1.com"}"#))
        .unwrap();
    assert_eq!(send(&app, empty).await.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cors_preflight_is_answered_without_a_token() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/v1/services")
        .header(header::ORIGIN, "https://ui.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let res = secured_app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://ui.example.com");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn state_builds_from_config() {
    let mut cfg = configs::AppConfig::default();
    cfg.catalog.data_file = DATA_FILE.to_string();
    cfg.catalog.validation = "minimal".into();
    cfg.auth.enabled = false;
    let state = build_state(&cfg).await.unwrap();
    assert!(!state.auth_enabled());
    assert_eq!(state.catalog.policy(), service::catalog::ValidationPolicy::Minimal);

    cfg.catalog.data_file = "/definitely/not/here.yaml".into();
    assert!(build_state(&cfg).await.is_err());
}
