use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use adsales::{
    config::ArtifactConfig,
    dashboard::{create_router, DashboardState},
    ml::{LinearModel, Predictor, StandardScaler},
    services::{ArtifactSummary, HealthState},
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn dashboard_app() -> Router {
    let scaler = StandardScaler {
        feature_names: vec![],
        mean: vec![0.0; 3],
        std: vec![1.0; 3],
        metadata: json!({}),
    };
    let model = LinearModel {
        weights: vec![0.05, 0.2, 0.0],
        intercept: 3.0,
        metadata: json!({}),
    };
    let predictor = Predictor::new(scaler, model).expect("valid predictor");
    let paths = ArtifactConfig {
        scaler_path: PathBuf::from("artifacts/scaler.json"),
        model_path: PathBuf::from("artifacts/model.json"),
    };
    let health = HealthState::new("dashboard", ArtifactSummary::new(&predictor, &paths));

    create_router(DashboardState::new(Arc::new(predictor), Arc::new(health)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
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

#[tokio::test]
async fn first_visit_predicts_the_default_budget() {
    let app = dashboard_app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="TV" value="150""#));
    assert!(body.contains(r#"name="Radio" value="25""#));
    // 3 + 0.05 * 150 + 0.2 * 25
    assert!(body.contains("Predicted sales: <strong>15.50</strong>"));
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn submitted_budget_is_echoed_and_charted() {
    let app = dashboard_app();
    let (status, body) = get(&app, "/?TV=100&Radio=10&Newspaper=5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="TV" value="100""#));
    assert!(body.contains(r#"name="Newspaper" value="5""#));
    assert!(body.contains("Predicted sales: <strong>10.00</strong>"));
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn invalid_budget_shows_an_error_without_chart() {
    let app = dashboard_app();
    let (status, body) = get(&app, "/?TV=lots&Radio=10&Newspaper=5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("must be a number"));
    assert!(body.contains(r#"name="TV" value="lots""#));
    assert!(!body.contains("<svg"));
}

#[tokio::test]
async fn partial_query_reports_the_missing_field() {
    let app = dashboard_app();
    let (status, body) = get(&app, "/?TV=100").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("missing field &#39;Radio&#39;"));
    assert!(!body.contains("<svg"));
}

#[tokio::test]
async fn dashboard_exposes_health() {
    let app = dashboard_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["service"], "dashboard");
}
