use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::api::{state::AppState, types::*};
use crate::domain::AdSpend;
use crate::error::{AdSalesError, InputError};
use crate::ml::round2;

/// POST /predict
///
/// The body is parsed as JSON whatever the declared content type.
pub async fn predict_json(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<PredictionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        reject(AdSalesError::Input(InputError::MalformedBody(e.to_string())))
    })?;
    let spend = AdSpend::from_json(&value).map_err(|e| reject(e.into()))?;

    let prediction = state.predictor.predict(&spend).map_err(reject)?;
    debug!(?spend, prediction, "json prediction");

    Ok(Json(PredictionResponse {
        sales_prediction: round2(prediction),
    }))
}

/// Map an error to a status code: caller mistakes are 400, everything else 500.
pub(crate) fn reject(err: AdSalesError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is_client_error() {
        warn!("rejected prediction request: {}", err);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string())))
    } else {
        error!("prediction failed: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("prediction failed")),
        )
    }
}
