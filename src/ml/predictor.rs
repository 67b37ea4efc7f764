//! Scale-then-predict inference over a loaded scaler and model.

use std::path::Path;
use tracing::info;

use crate::domain::{AdSpend, Feature};
use crate::error::{AdSalesError, InputError, Result};
use crate::ml::artifact::Artifact;
use crate::ml::linear::LinearModel;
use crate::ml::scaler::StandardScaler;

/// Immutable scaler + model pair shared by every request handler.
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler: StandardScaler,
    model: LinearModel,
}

impl Predictor {
    pub fn new(scaler: StandardScaler, model: LinearModel) -> Result<Self> {
        scaler.validate().map_err(AdSalesError::Validation)?;
        model.validate().map_err(AdSalesError::Validation)?;
        if scaler.n_features() != model.n_features() {
            return Err(AdSalesError::Validation(format!(
                "scaler outputs {} features but model expects {}",
                scaler.n_features(),
                model.n_features()
            )));
        }
        if scaler.n_features() != Feature::ALL.len() {
            return Err(AdSalesError::Validation(format!(
                "artifacts are fitted on {} features, expected TV, Radio, Newspaper",
                scaler.n_features()
            )));
        }
        Ok(Self { scaler, model })
    }

    /// Load both artifacts from disk.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(scaler_path: P, model_path: Q) -> Result<Self> {
        let scaler = StandardScaler::from_file(scaler_path.as_ref())?;
        let model = LinearModel::from_file(model_path.as_ref())?;
        let predictor = Self::new(scaler, model)?;

        info!(
            scaler = %scaler_path.as_ref().display(),
            model = %model_path.as_ref().display(),
            "loaded predictor artifacts"
        );
        Ok(predictor)
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Predicted sales for one advertising budget.
    pub fn predict(&self, spend: &AdSpend) -> Result<f64> {
        let features = spend.to_features();
        if features.iter().any(|v| !v.is_finite()) {
            return Err(AdSalesError::Validation(
                "inputs must be finite numbers".to_string(),
            ));
        }

        // Finite but huge inputs can overflow in either stage.
        let scaled = self.scaler.transform(&features)?;
        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(InputError::OutOfRange.into());
        }
        let prediction = self.model.predict(&scaled)?;
        if !prediction.is_finite() {
            return Err(InputError::OutOfRange.into());
        }
        Ok(prediction)
    }
}

/// Round to two decimal places for display and JSON responses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
