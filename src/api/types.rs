use serde::{Deserialize, Serialize};

// ============================================================================
// Prediction Types
// ============================================================================

/// Body of a successful `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub sales_prediction: f64,
}

/// Form fields of `POST /predict_web`, kept as text so bad input can be reported
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictForm {
    #[serde(rename = "TV")]
    pub tv: Option<String>,
    #[serde(rename = "Radio")]
    pub radio: Option<String>,
    #[serde(rename = "Newspaper")]
    pub newspaper: Option<String>,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
