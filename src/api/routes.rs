use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};
use crate::services::health_routes;

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // HTML form
        .route("/", get(handlers::index))
        .route("/predict_web", post(handlers::predict_web))
        // JSON API
        .route("/predict", post(handlers::predict_json))
        // Health endpoints
        .merge(health_routes())
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
