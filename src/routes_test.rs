use std::path::PathBuf;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn scratch_site_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("classmate-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    root
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = host_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_host_route_is_not_found() {
    let response = host_routes()
        .oneshot(Request::builder().uri("/api/homework").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pkg_files_are_served_from_site_root() {
    let root = scratch_site_root("pkg");
    std::fs::write(root.join("pkg").join("classmate.css"), "body{}").unwrap();

    let response = with_assets(host_routes(), &root)
        .oneshot(Request::builder().uri("/pkg/classmate.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"body{}");

    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn missing_pkg_file_is_not_found() {
    let root = scratch_site_root("missing");
    let response = with_assets(host_routes(), &root)
        .oneshot(Request::builder().uri("/pkg/nope.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let _ = std::fs::remove_dir_all(root);
}
