use axum::extract::FromRef;
use std::sync::Arc;

use crate::ml::Predictor;
use crate::services::HealthState;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Scaler + model, loaded once at startup and never mutated
    pub predictor: Arc<Predictor>,

    /// Startup info for the health endpoints
    pub health: Arc<HealthState>,
}

impl AppState {
    pub fn new(predictor: Arc<Predictor>, health: Arc<HealthState>) -> Self {
        Self { predictor, health }
    }
}

impl FromRef<AppState> for Arc<HealthState> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.health)
    }
}
