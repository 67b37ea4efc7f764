//! Per-feature standardization (z-score).

use ndarray::{Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{AdSalesError, Result};
use crate::ml::artifact::Artifact;

/// Fitted `(x - mean) / std` transform.
///
/// Uses the population standard deviation. A constant column is given a
/// scale of `1.0` so the transform stays finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Column names in input order; empty when unknown.
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,

    /// Optional free-form metadata (training info, etc).
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl StandardScaler {
    pub fn fit(features: ArrayView2<'_, f64>) -> Result<Self> {
        if features.nrows() == 0 || features.ncols() == 0 {
            return Err(AdSalesError::EmptyDataset);
        }

        let mean = features
            .mean_axis(Axis(0))
            .ok_or(AdSalesError::EmptyDataset)?;
        let std = features
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s.is_finite() && s > 0.0 { s } else { 1.0 });

        let scaler = Self {
            feature_names: Vec::new(),
            mean: mean.to_vec(),
            std: std.to_vec(),
            metadata: serde_json::Value::Null,
        };
        scaler.validate().map_err(AdSalesError::Validation)?;
        Ok(scaler)
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = names;
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.n_features() {
            return Err(AdSalesError::Validation(format!(
                "scaler input dim mismatch: got {}, expected {}",
                input.len(),
                self.n_features()
            )));
        }

        Ok(input
            .iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(x, (mean, std))| (x - mean) / std)
            .collect())
    }

    pub fn transform_matrix(&self, features: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        if features.ncols() != self.n_features() {
            return Err(AdSalesError::Validation(format!(
                "scaler input dim mismatch: got {} columns, expected {}",
                features.ncols(),
                self.n_features()
            )));
        }

        let mut out = features.to_owned();
        for (j, mut column) in out.axis_iter_mut(Axis(1)).enumerate() {
            let (mean, std) = (self.mean[j], self.std[j]);
            column.mapv_inplace(|x| (x - mean) / std);
        }
        Ok(out)
    }
}

impl Artifact for StandardScaler {
    const KIND: &'static str = "scaler";

    fn validate(&self) -> std::result::Result<(), String> {
        if self.mean.is_empty() {
            return Err("mean must not be empty".to_string());
        }
        if self.std.len() != self.mean.len() {
            return Err(format!(
                "std length {} != mean length {}",
                self.std.len(),
                self.mean.len()
            ));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.mean.len() {
            return Err(format!(
                "feature_names length {} != mean length {}",
                self.feature_names.len(),
                self.mean.len()
            ));
        }
        if self.mean.iter().any(|v| !v.is_finite()) {
            return Err("mean must be finite".to_string());
        }
        if self.std.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err("std must be finite and > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn fit_computes_population_stats() {
        let x = array![[1.0, 10.0], [3.0, 10.0], [5.0, 10.0]];
        let scaler = StandardScaler::fit(x.view()).unwrap();

        assert_eq!(scaler.mean, vec![3.0, 10.0]);
        // population std of [1, 3, 5] is sqrt(8/3)
        assert!((scaler.std[0] - (8.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        // constant column falls back to unit scale
        assert_eq!(scaler.std[1], 1.0);
    }

    #[test]
    fn transform_is_deterministic() {
        let x = array![[1.0, 2.0, 3.0], [4.0, 6.0, 8.0], [7.0, 1.0, 0.0]];
        let scaler = StandardScaler::fit(x.view()).unwrap();

        let a = scaler.transform(&[2.5, 3.0, 4.0]).unwrap();
        let b = scaler.transform(&[2.5, 3.0, 4.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn transformed_training_columns_are_standardized() {
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 9.0], [4.0, 1.0]];
        let scaler = StandardScaler::fit(x.view()).unwrap();
        let z = scaler.transform_matrix(x.view()).unwrap();

        for column in z.axis_iter(Axis(1)) {
            let mean = column.mean().unwrap();
            let std = column.std(0.0);
            assert!(mean.abs() < 1e-12);
            assert!((std - 1.0).abs() < 1e-12);
        }

        // row-wise and matrix transforms agree
        let row = scaler.transform(&[3.0, 9.0]).unwrap();
        assert_eq!(row, z.row(2).to_vec());
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let scaler = StandardScaler::fit(x.view()).unwrap();
        assert!(scaler.transform(&[1.0]).is_err());
        assert!(scaler.transform_matrix(array![[1.0, 2.0, 3.0]].view()).is_err());
    }

    #[test]
    fn fit_rejects_empty_input() {
        let x = Array2::<f64>::zeros((0, 3));
        assert!(matches!(
            StandardScaler::fit(x.view()),
            Err(AdSalesError::EmptyDataset)
        ));
    }

    #[test]
    fn validates_shapes() {
        let bad = StandardScaler {
            feature_names: vec![],
            mean: vec![0.0, 1.0],
            std: vec![1.0],
            metadata: serde_json::json!({}),
        };
        assert!(bad.validate().is_err());

        let zero_std = StandardScaler {
            feature_names: vec![],
            mean: vec![0.0],
            std: vec![0.0],
            metadata: serde_json::json!({}),
        };
        assert!(zero_std.validate().is_err());
    }
}
