// Inline endpoint contract tests: the routes that must serve no matter what
// happened to the controller probe.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use backend_api::{build_router, controllers, AppState};

fn app() -> Router {
    build_router(Arc::new(AppState::new()), controllers::probe())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_returns_status_summary() {
    let (status, body) = get_json(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Backend API is running");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["swagger"], "/docs");
    assert_eq!(body["api"], "/api/test");
}

#[tokio::test]
async fn health_is_independent_of_backing_stores() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Backend API");
}

#[tokio::test]
async fn swagger_redirects_to_docs() {
    let resp = app()
        .oneshot(Request::builder().uri("/swagger").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/docs"
    );
}

#[tokio::test]
async fn docs_page_serves_swagger_ui() {
    let resp = app()
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8_lossy(&bytes);
    assert!(page.contains("swagger-ui"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, doc) = get_json(app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["openapi"].is_string());
    assert!(doc["paths"]["/health"].is_object());
    // Info block carries the application instance's own metadata.
    assert_eq!(doc["info"]["title"], "Backend API");
    assert_eq!(doc["info"]["version"], "1.0.0");
}

#[tokio::test]
async fn controller_routes_are_mounted() {
    let (status, body) = get_json(app(), "/api/test/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ping"], "pong");
}

#[tokio::test]
async fn cross_origin_requests_are_mirrored_with_credentials() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://example.github.io")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap()
            .to_str()
            .unwrap(),
        "https://example.github.io"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap()
            .to_str()
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn preflight_allows_any_method_and_header() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method(http::Method::OPTIONS)
                .uri("/api/test/")
                .header(header::ORIGIN, "https://anywhere.invalid")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap(),
        "DELETE"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .unwrap()
            .to_str()
            .unwrap(),
        "x-custom-header"
    );
}
