//! Service B: single-page dashboard with a prediction and a bar chart.
//!
//! The predictor is loaded once before the router is built, so repeated
//! submissions never touch the artifact files again.

pub mod chart;
pub mod page;

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::domain::AdSpend;
use crate::ml::Predictor;
use crate::services::{health_routes, HealthState};

pub use page::{render_dashboard, DashboardView};

/// Budget shown before the first submission
pub const DEFAULT_SPEND: AdSpend = AdSpend {
    tv: 150.0,
    radio: 25.0,
    newspaper: 30.0,
};

#[derive(Clone)]
pub struct DashboardState {
    pub predictor: Arc<Predictor>,
    pub health: Arc<HealthState>,
}

impl DashboardState {
    pub fn new(predictor: Arc<Predictor>, health: Arc<HealthState>) -> Self {
        Self { predictor, health }
    }
}

impl FromRef<DashboardState> for Arc<HealthState> {
    fn from_ref(state: &DashboardState) -> Self {
        Arc::clone(&state.health)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "TV")]
    pub tv: Option<String>,
    #[serde(rename = "Radio")]
    pub radio: Option<String>,
    #[serde(rename = "Newspaper")]
    pub newspaper: Option<String>,
}

impl DashboardQuery {
    fn is_empty(&self) -> bool {
        self.tv.is_none() && self.radio.is_none() && self.newspaper.is_none()
    }
}

pub fn create_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .merge(health_routes())
        .with_state(state)
}

/// GET / (the form submits back here as a query string)
async fn dashboard_handler(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> (StatusCode, Html<String>) {
    let spend = if query.is_empty() {
        Ok(DEFAULT_SPEND)
    } else {
        AdSpend::from_text_fields(
            query.tv.as_deref(),
            query.radio.as_deref(),
            query.newspaper.as_deref(),
        )
    };

    let raw_fields = || {
        [&query.tv, &query.radio, &query.newspaper].map(|v| v.clone().unwrap_or_default())
    };

    let (status, view) = match spend {
        Ok(spend) => match state.predictor.predict(&spend) {
            Ok(prediction) => {
                debug!(?spend, prediction, "dashboard prediction");
                (StatusCode::OK, DashboardView::prediction(spend, prediction))
            }
            Err(e) if e.is_client_error() => {
                warn!("rejected dashboard input: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    DashboardView::error(raw_fields(), e.to_string()),
                )
            }
            Err(e) => {
                error!("dashboard prediction failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DashboardView::error(raw_fields(), "prediction failed".to_string()),
                )
            }
        },
        Err(e) => {
            warn!("rejected dashboard input: {}", e);
            (
                StatusCode::BAD_REQUEST,
                DashboardView::error(raw_fields(), e.to_string()),
            )
        }
    };

    (status, Html(render_dashboard(&view)))
}
