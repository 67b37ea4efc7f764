use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form,
};
use tracing::{debug, error, warn};

use crate::api::{
    state::AppState,
    templates::{render_predict_page, Outcome},
    types::PredictForm,
};
use crate::domain::AdSpend;

/// GET /
pub async fn index() -> Html<String> {
    Html(render_predict_page(&Outcome::Empty))
}

/// POST /predict_web
pub async fn predict_web(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> impl IntoResponse {
    let spend = match AdSpend::from_text_fields(
        form.tv.as_deref(),
        form.radio.as_deref(),
        form.newspaper.as_deref(),
    ) {
        Ok(spend) => spend,
        Err(e) => {
            warn!("rejected form submission: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Html(render_predict_page(&Outcome::Error(e.to_string()))),
            );
        }
    };

    match state.predictor.predict(&spend) {
        Ok(prediction) => {
            debug!(?spend, prediction, "form prediction");
            (
                StatusCode::OK,
                Html(render_predict_page(&Outcome::Prediction(prediction))),
            )
        }
        Err(e) if e.is_client_error() => {
            warn!("rejected form submission: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Html(render_predict_page(&Outcome::Error(e.to_string()))),
            )
        }
        Err(e) => {
            error!("form prediction failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_predict_page(&Outcome::Error(
                    "prediction failed".to_string(),
                ))),
            )
        }
    }
}
