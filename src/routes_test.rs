use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn full_app() -> Router {
    let conf = get_configuration(Some("Cargo.toml")).unwrap();
    app_with_options(conf.leptos_options)
}

async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn site_root() -> PathBuf {
    std::env::temp_dir().join("coordinate-routes-test")
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_answer_healthz() {
    let response = base_routes(&site_root())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn base_routes_missing_bundle_file_is_not_found() {
    let response = base_routes(&site_root())
        .oneshot(Request::builder().uri("/pkg/coordinate.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn base_routes_healthz_rejects_post() {
    let response = base_routes(&site_root())
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn app_renders_home_with_loading_placeholder() {
    let (status, body) = get_body(full_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading..."), "body: {body}");
}

#[tokio::test]
async fn app_renders_dashboard_on_server_as_loading() {
    let (status, body) = get_body(full_app(), "/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading..."), "body: {body}");
}

#[tokio::test]
async fn app_renders_not_found_view_for_unknown_path() {
    let (_, body) = get_body(full_app(), "/no-such-page").await;
    assert!(body.contains("Page not found."), "body: {body}");
}

#[tokio::test]
async fn app_still_answers_healthz() {
    let (status, _) = get_body(full_app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}
