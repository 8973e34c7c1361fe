use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt as _;
use leadengine_http::{AppState, cors_layer, create_router};
use leadengine_service::IntakeService;
use leadengine_storage::{LeadStore, SiteStore, StorageBackend};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt as _;

struct TestApp {
    router: Router,
    storage: Arc<StorageBackend>,
    _dir: TempDir,
}

async fn test_app(origins: &[String]) -> TestApp {
    let dir = TempDir::new().unwrap();
    let storage =
        Arc::new(StorageBackend::new_sqlite(&dir.path().join("leads.db"), 4).await.unwrap());
    let state = Arc::new(AppState { intake: Arc::new(IntakeService::new(Arc::clone(&storage))) });
    TestApp { router: create_router(state, cors_layer(origins)), storage, _dir: dir }
}

fn lead_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/lead")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn new_slug_creates_site_and_unrouted_lead() {
    let app = test_app(&[]).await;

    let response = app
        .router
        .oneshot(lead_request(
            "site_slug=water-damage-restoration_dallas&name=Jane+Doe&phone=555-123-4567",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Thank you for contacting us. We will reach out shortly.");

    let site = app.storage.get_site_by_slug("water-damage-restoration_dallas").await.unwrap().unwrap();
    assert_eq!(site.niche, "Water Damage Restoration");
    assert_eq!(site.city, "Dallas");
    assert_eq!(site.partner_email, None);
    let leads = app.storage.leads_for_site(site.id).await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Jane Doe");
    assert!(!leads[0].routed);
}

#[tokio::test]
async fn slug_without_city_gets_unknown_city() {
    let app = test_app(&[]).await;

    let response = app
        .router
        .oneshot(lead_request("site_slug=water-damage-restoration&name=Jane&phone=555"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let site = app.storage.get_site_by_slug("water-damage-restoration").await.unwrap().unwrap();
    assert_eq!(site.niche, "water-damage-restoration");
    assert_eq!(site.city, "Unknown");
}

#[tokio::test]
async fn blank_phone_is_400_and_writes_nothing() {
    let app = test_app(&[]).await;

    let response = app
        .router
        .oneshot(lead_request("site_slug=pest-control_miami&name=Jane+Doe&phone=+++"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["detail"], "Name and phone are required.");
    assert_eq!(app.storage.count_sites().await.unwrap(), 0);
    assert_eq!(app.storage.count_leads().await.unwrap(), 0);
}

#[tokio::test]
async fn missing_field_is_422() {
    let app = test_app(&[]).await;

    let response =
        app.router.oneshot(lead_request("site_slug=pest-control_miami&name=Jane")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(response).await["detail"].is_string());
    assert_eq!(app.storage.count_leads().await.unwrap(), 0);
}

#[tokio::test]
async fn json_body_is_422() {
    let app = test_app(&[]).await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/lead")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"site_slug":"a_b","name":"Jane","phone":"555"}"#))
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn partnered_site_routes_lead() {
    let app = test_app(&[]).await;
    let first = app
        .router
        .clone()
        .oneshot(lead_request("site_slug=emergency-plumbing_houston&name=A&phone=1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert!(
        app.storage
            .set_partner("emergency-plumbing_houston", Some("ops@houston-plumbing.example"))
            .await
            .unwrap()
    );

    let response = app
        .router
        .oneshot(lead_request(
            "site_slug=emergency-plumbing_houston&name=B&phone=2&email=b%40example.com&service=Leak",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["message"],
        "Thank you! Your request has been routed to our local partner."
    );
    let site = app.storage.get_site_by_slug("emergency-plumbing_houston").await.unwrap().unwrap();
    let leads = app.storage.leads_for_site(site.id).await.unwrap();
    assert_eq!(leads.len(), 2);
    assert!(!leads[0].routed);
    assert!(leads[1].routed);
    assert_eq!(leads[1].email.as_deref(), Some("b@example.com"));
    assert_eq!(app.storage.count_sites().await.unwrap(), 1);
}

#[tokio::test]
async fn health_and_version() {
    let app = test_app(&[]).await;

    let health = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    let bytes = health.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");

    let version = app
        .router
        .oneshot(Request::builder().uri("/api/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(json_body(version).await["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn permissive_cors_by_default() {
    let app = test_app(&[]).await;
    let mut request = lead_request("site_slug=a_b&name=Jane&phone=555");
    request.headers_mut().insert(header::ORIGIN, "https://anything.example".parse().unwrap());

    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn configured_origins_restrict_cors() {
    let app = test_app(&["https://dallas-restoration.example".to_owned()]).await;

    let mut allowed = lead_request("site_slug=a_b&name=Jane&phone=555");
    allowed
        .headers_mut()
        .insert(header::ORIGIN, "https://dallas-restoration.example".parse().unwrap());
    let response = app.router.clone().oneshot(allowed).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://dallas-restoration.example"
    );

    let mut foreign = lead_request("site_slug=a_b&name=Jane&phone=555");
    foreign.headers_mut().insert(header::ORIGIN, "https://evil.example".parse().unwrap());
    let response = app.router.oneshot(foreign).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
