use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use adsales::{
    api::{create_router, AppState},
    config::ArtifactConfig,
    ml::{LinearModel, Predictor, StandardScaler},
    services::{ArtifactSummary, HealthState},
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

/// Identity scaler and `3 + 0.05·TV + 0.2·Radio` so expected values are exact.
fn test_app() -> Router {
    app_with_scale(vec![1.0, 1.0, 1.0])
}

fn app_with_scale(std: Vec<f64>) -> Router {
    let scaler = StandardScaler {
        feature_names: vec![],
        mean: vec![0.0, 0.0, 0.0],
        std,
        metadata: json!({}),
    };
    let model = LinearModel {
        weights: vec![0.05, 0.2, 0.0],
        intercept: 3.0,
        metadata: json!({"trained_at": "2026-01-01T00:00:00Z"}),
    };
    let predictor = Predictor::new(scaler, model).expect("valid predictor");
    let paths = ArtifactConfig {
        scaler_path: PathBuf::from("artifacts/scaler.json"),
        model_path: PathBuf::from("artifacts/model.json"),
    };
    let health = HealthState::new("api", ArtifactSummary::new(&predictor, &paths));

    create_router(AppState::new(Arc::new(predictor), Arc::new(health)))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, String) {
    let mut request_builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request_builder = request_builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = request_builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    (status, String::from_utf8_lossy(&bytes).to_string())
}

async fn predict_json(app: &Router, payload: &str) -> (StatusCode, Value) {
    let (status, body) = send(
        app,
        Method::POST,
        "/predict",
        Some("application/json"),
        payload,
    )
    .await;
    let value = serde_json::from_str(&body).expect("response is JSON");
    (status, value)
}

#[tokio::test]
async fn index_serves_the_form() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/", None, "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/predict_web""#));
    assert!(body.contains(r#"name="Newspaper""#));
}

#[tokio::test]
async fn predict_returns_rounded_scalar() {
    let app = test_app();
    let (status, body) = predict_json(&app, r#"{"TV": 100, "Radio": 10, "Newspaper": 5}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"sales_prediction": 10.0}));
}

#[tokio::test]
async fn predict_ignores_content_type() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/predict",
        Some("text/plain"),
        r#"{"TV": 50, "Radio": 20, "Newspaper": 0}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["sales_prediction"], json!(9.5));
}

#[tokio::test]
async fn predict_coerces_numeric_strings() {
    let app = test_app();
    let (status, body) =
        predict_json(&app, r#"{"TV": "100", "Radio": "10", "Newspaper": "5"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sales_prediction"], json!(10.0));
}

#[tokio::test]
async fn non_numeric_input_is_a_client_error() {
    let app = test_app();
    let (status, body) =
        predict_json(&app, r#"{"TV": "abc", "Radio": 10, "Newspaper": 5}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("TV"), "unexpected message: {message}");
}

#[tokio::test]
async fn missing_field_is_a_client_error() {
    let app = test_app();
    let (status, body) = predict_json(&app, r#"{"TV": 1, "Radio": 10}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Newspaper"));
}

#[tokio::test]
async fn field_names_are_case_sensitive() {
    let app = test_app();
    let (status, _) = predict_json(&app, r#"{"tv": 1, "radio": 10, "newspaper": 5}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn overflowing_input_is_a_client_error() {
    let app = app_with_scale(vec![0.5, 1.0, 1.0]);
    let (status, body) =
        predict_json(&app, r#"{"TV": 1e308, "Radio": 1, "Newspaper": 1}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("too large"));

    let (status, page) = send(
        &app,
        Method::POST,
        "/predict_web",
        Some("application/x-www-form-urlencoded"),
        "TV=1e308&Radio=1&Newspaper=1",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(page.contains("too large to score"));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = test_app();
    let (status, body) = predict_json(&app, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("malformed JSON"));
}

#[tokio::test]
async fn predict_web_renders_prediction() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/predict_web",
        Some("application/x-www-form-urlencoded"),
        "TV=100&Radio=10&Newspaper=5",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("$10.00k"));
}

#[tokio::test]
async fn predict_web_reports_bad_input_on_the_page() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/predict_web",
        Some("application/x-www-form-urlencoded"),
        "TV=abc&Radio=10&Newspaper=5",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("must be a number"));
    assert!(body.contains(r#"action="/predict_web""#));
}

#[tokio::test]
async fn health_endpoints_report_loaded_artifacts() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/healthz", None, "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/health", None, "").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["service"], "api");
    assert_eq!(value["artifacts"]["n_features"], 3);
    assert_eq!(value["artifacts"]["trained_at"], "2026-01-01T00:00:00Z");
}
