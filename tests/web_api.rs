use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use image::{GenericImageView, ImageFormat};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

use mood_wallpaper::errors::SourceResult;
use mood_wallpaper::services::{DiskCache, FetchOrchestrator};
use mood_wallpaper::utils::ImageFetcher;
use mood_wallpaper::web::{AppState, WebServer};

/// Answers every URL with bytes unique to that URL
struct EchoFetcher;

#[async_trait]
impl ImageFetcher for EchoFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> SourceResult<Vec<u8>> {
        Ok(format!("image from {url}").into_bytes())
    }
}

fn app(dir: &TempDir) -> Router {
    let orchestrator = FetchOrchestrator::new(Arc::new(EchoFetcher), DiskCache::new(dir.path()));
    WebServer::create_router(AppState {
        orchestrator: Arc::new(orchestrator),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (Response, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap().to_vec();
    (Response::from_parts(parts, Body::empty()), bytes)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (response, body) = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].is_string());
    assert_eq!(json["stats"]["direct"], 0);
    assert_eq!(json["acquisitions"], 0);
}

#[tokio::test]
async fn test_emotion_endpoint_serves_direct_image() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (response, body) = send(&app, post_json("/api/emotion", r#"{"emotion":"Happy"}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    assert_eq!(response.headers()["x-detected-emotion"], "happy");
    assert_eq!(response.headers()["x-wallpaper-tier"], "direct");
    assert!(body.starts_with(b"image from https://"));
}

#[tokio::test]
async fn test_emotion_endpoint_normalizes_unknown_and_non_json() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (response, _) = send(&app, post_json("/api/emotion", r#"{"emotion":"ecstatic"}"#)).await;
    assert_eq!(response.headers()["x-detected-emotion"], "neutral");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/emotion")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=x")
        .body(Body::from("--x--"))
        .unwrap();
    let (response, _) = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-detected-emotion"], "neutral");
}

#[tokio::test]
async fn test_wallpaper_endpoint_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let uri = "/api/wallpaper?emotion=fear&seed=42&style=grainy-shapes";

    let (first, first_body) = send(&app, post_json(uri, "")).await;
    let (_, second_body) = send(&app, post_json(uri, "")).await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(first.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(first.headers()["x-mood"], "fear");
    assert_eq!(first.headers()["x-seed"], "42");
    assert!(first_body == second_body);

    let decoded = image::load_from_memory_with_format(&first_body, ImageFormat::Png).unwrap();
    assert_eq!(decoded.dimensions(), (1920, 1080));
}

#[tokio::test]
async fn test_wallpaper_endpoint_defaults_and_errors() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (response, _) = send(&app, post_json("/api/wallpaper?style=0", "")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-mood"], "neutral");
    assert_eq!(response.headers()["x-seed"], "random");

    let (response, body) = send(&app, post_json("/api/wallpaper?style=watercolour", "")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_cors_exposes_emotion_header() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/emotion")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"emotion":"sad"}"#))
        .unwrap();
    let (response, _) = send(&app, request).await;
    let exposed = response.headers()[header::ACCESS_CONTROL_EXPOSE_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(exposed.contains("x-detected-emotion"));
}
