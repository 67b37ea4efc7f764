//! Ordinary least-squares linear model.

use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{AdSalesError, Result};
use crate::ml::artifact::Artifact;

/// Fitted `intercept + Σ wᵢ·xᵢ`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// One weight per (scaled) input feature.
    pub weights: Vec<f64>,
    pub intercept: f64,

    /// Optional free-form metadata (training info, etc).
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl LinearModel {
    /// Closed-form least-squares fit with an intercept term.
    pub fn fit(x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<Self> {
        if x.nrows() == 0 {
            return Err(AdSalesError::EmptyDataset);
        }
        if x.nrows() != y.len() {
            return Err(AdSalesError::Validation(format!(
                "feature rows {} != target rows {}",
                x.nrows(),
                y.len()
            )));
        }

        let dataset = DatasetBase::new(x.to_owned(), y.to_owned());
        let fitted = LinearRegression::new()
            .fit(&dataset)
            .map_err(|e| AdSalesError::Fit(e.to_string()))?;

        let model = Self {
            weights: fitted.params().to_vec(),
            intercept: fitted.intercept(),
            metadata: serde_json::Value::Null,
        };
        model.validate().map_err(AdSalesError::Fit)?;
        Ok(model)
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    pub fn predict(&self, input: &[f64]) -> Result<f64> {
        if input.len() != self.n_features() {
            return Err(AdSalesError::Validation(format!(
                "model input dim mismatch: got {}, expected {}",
                input.len(),
                self.n_features()
            )));
        }

        Ok(self.intercept
            + self
                .weights
                .iter()
                .zip(input)
                .map(|(w, x)| w * x)
                .sum::<f64>())
    }

    pub fn predict_matrix(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.n_features() {
            return Err(AdSalesError::Validation(format!(
                "model input dim mismatch: got {} columns, expected {}",
                x.ncols(),
                self.n_features()
            )));
        }
        let weights = Array1::from(self.weights.clone());
        Ok(x.dot(&weights) + self.intercept)
    }
}

impl Artifact for LinearModel {
    const KIND: &'static str = "model";

    fn validate(&self) -> std::result::Result<(), String> {
        if self.weights.is_empty() {
            return Err("weights must not be empty".to_string());
        }
        if self.weights.iter().any(|v| !v.is_finite()) {
            return Err("weights contain non-finite values".to_string());
        }
        if !self.intercept.is_finite() {
            return Err("intercept must be finite".to_string());
        }
        Ok(())
    }
}
