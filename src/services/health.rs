//! Liveness and status endpoints shared by both HTTP services.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ArtifactConfig;
use crate::ml::Predictor;

/// What the running process loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSummary {
    pub scaler_path: String,
    pub model_path: String,
    pub n_features: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<String>,
}

impl ArtifactSummary {
    pub fn new(predictor: &Predictor, paths: &ArtifactConfig) -> Self {
        let trained_at = predictor
            .model()
            .metadata
            .get("trained_at")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Self {
            scaler_path: paths.scaler_path.display().to_string(),
            model_path: paths.model_path.display().to_string(),
            n_features: predictor.model().n_features(),
            trained_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub artifacts: ArtifactSummary,
}

/// Shared state for the health endpoints
#[derive(Debug)]
pub struct HealthState {
    /// When the server started
    pub started_at: DateTime<Utc>,
    /// Which front-end is answering ("api" or "dashboard")
    pub service: &'static str,
    pub artifacts: ArtifactSummary,
}

impl HealthState {
    pub fn new(service: &'static str, artifacts: ArtifactSummary) -> Self {
        Self {
            started_at: Utc::now(),
            service,
            artifacts,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }

    pub fn get_health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            service: self.service.to_string(),
            timestamp: Utc::now(),
            uptime_seconds: self.uptime_seconds(),
            artifacts: self.artifacts.clone(),
        }
    }
}

/// `/health` and `/healthz`, mountable on any router whose state exposes `Arc<HealthState>`.
pub fn health_routes<S>() -> Router<S>
where
    Arc<HealthState>: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/healthz", get(liveness_handler))
}

/// Full status endpoint
async fn health_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.get_health()))
}

/// Liveness probe - is the process alive?
async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_reports_service_and_artifacts() {
        let state = HealthState::new(
            "api",
            ArtifactSummary {
                scaler_path: "artifacts/scaler.json".to_string(),
                model_path: "artifacts/model.json".to_string(),
                n_features: 3,
                trained_at: None,
            },
        );
        let health = state.get_health();
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "api");
        assert_eq!(health.artifacts.n_features, 3);

        let json = serde_json::to_value(&health).unwrap();
        assert!(json["artifacts"].get("trained_at").is_none());
    }
}
