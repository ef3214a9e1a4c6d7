//! Generation endpoint contract tests.

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use orrery::content::ContentGenerator;
use orrery::http::{create_router, AppState};

use support::CountingGenerator;

fn app(generator: Option<Arc<dyn ContentGenerator>>) -> axum::Router {
    create_router(AppState::new(generator))
}

fn generate_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/generate-planet-content")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn hoth_body() -> Value {
    json!({
        "planet": {
            "name": "Hoth",
            "climate": "frozen",
            "terrain": "tundra, ice caves",
            "population": "unknown",
            "gravity": "1.1 standard",
            "diameter": "7200",
        }
    })
}

#[tokio::test]
async fn success_returns_schema_bounded_content() {
    let app = app(Some(Arc::new(CountingGenerator::succeeding())));

    let response = app.oneshot(generate_request(hoth_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let tagline = body["tagline"].as_str().unwrap();
    let guide = body["travelGuide"].as_str().unwrap();
    let emoji = body["emoji"].as_str().unwrap();
    assert!(!tagline.is_empty() && tagline.chars().count() <= 60);
    assert!(!guide.is_empty());
    assert!(!emoji.is_empty() && emoji.chars().count() <= 8);
}

#[tokio::test]
async fn missing_name_is_a_400() {
    let app = app(Some(Arc::new(CountingGenerator::succeeding())));

    let response = app
        .oneshot(generate_request(json!({"planet": {"climate": "frozen"}})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid planet data provided");
}

#[tokio::test]
async fn missing_planet_object_is_a_400() {
    let app = app(Some(Arc::new(CountingGenerator::succeeding())));

    let response = app.oneshot(generate_request(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_method_is_a_405_with_error_body() {
    let app = app(Some(Arc::new(CountingGenerator::succeeding())));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/generate-planet-content")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn unconfigured_generator_is_a_500() {
    let app = app(None);

    let response = app.oneshot(generate_request(hoth_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "OpenAI API key not configured on server");
}

#[tokio::test]
async fn upstream_failure_degrades_to_a_templated_200() {
    let app = app(Some(Arc::new(CountingGenerator::failing())));

    let response = app.oneshot(generate_request(hoth_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["tagline"].as_str().unwrap().contains("Hoth"));
    assert!(body["travelGuide"].as_str().unwrap().contains("Hoth"));
    assert!(!body["emoji"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn preflight_options_returns_200_empty() {
    let app = app(None);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/generate-planet-content")
        .header(header::ORIGIN, "https://example.test")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(None);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
