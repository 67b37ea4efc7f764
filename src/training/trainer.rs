//! One-shot fit of the scaler and linear model.

use chrono::Utc;
use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::domain::Feature;
use crate::error::Result;
use crate::ml::{Artifact, LinearModel, StandardScaler};
use crate::training::dataset::Dataset;
use crate::training::split::train_test_split;

#[derive(Debug, Clone)]
pub struct TrainingOptions {
    pub dataset_path: PathBuf,
    pub scaler_path: PathBuf,
    pub model_path: PathBuf,
    pub holdout_ratio: f64,
    pub seed: u64,
}

impl From<&AppConfig> for TrainingOptions {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            dataset_path: cfg.data.dataset_path.clone(),
            scaler_path: cfg.artifacts.scaler_path.clone(),
            model_path: cfg.artifacts.model_path.clone(),
            holdout_ratio: cfg.training.holdout_ratio,
            seed: cfg.training.seed,
        }
    }
}

/// Goodness of fit on one set of rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitMetrics {
    pub rows: usize,
    pub r2: f64,
    pub rmse: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub rows: usize,
    pub train_rows: usize,
    pub holdout_rows: usize,
    pub seed: u64,
    pub weights: Vec<f64>,
    pub intercept: f64,
    pub train: FitMetrics,
    /// Absent when nothing was held out.
    pub holdout: Option<FitMetrics>,
}

/// Both fitted artifacts plus a summary of how they were produced
#[derive(Debug, Clone)]
pub struct FittedArtifacts {
    pub scaler: StandardScaler,
    pub model: LinearModel,
    pub report: TrainingReport,
}

pub struct Trainer {
    options: TrainingOptions,
}

impl Trainer {
    pub fn new(options: TrainingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TrainingOptions {
        &self.options
    }

    /// Load the dataset, fit, and write both artifacts.
    pub fn run(&self) -> Result<TrainingReport> {
        info!(path = %self.options.dataset_path.display(), "loading dataset");
        let dataset = Dataset::from_csv_path(&self.options.dataset_path)?;

        let fitted = self.fit(&dataset)?;
        fitted.scaler.save(&self.options.scaler_path)?;
        fitted.model.save(&self.options.model_path)?;

        info!(
            scaler = %self.options.scaler_path.display(),
            model = %self.options.model_path.display(),
            "artifacts written"
        );
        Ok(fitted.report)
    }

    /// Fit the scaler over every row, then fit OLS on the scaled training split.
    pub fn fit(&self, dataset: &Dataset) -> Result<FittedArtifacts> {
        let scaler = StandardScaler::fit(dataset.features.view())?;
        let scaled = scaler.transform_matrix(dataset.features.view())?;

        let split = train_test_split(
            scaled.view(),
            dataset.targets.view(),
            self.options.holdout_ratio,
            self.options.seed,
        )?;
        debug!(
            train_rows = split.y_train.len(),
            holdout_rows = split.y_holdout.len(),
            seed = self.options.seed,
            "split dataset"
        );

        let model = LinearModel::fit(split.x_train.view(), split.y_train.view())?;

        let train = evaluate(&model, split.x_train.view(), split.y_train.view())?;
        let holdout = if split.y_holdout.is_empty() {
            None
        } else {
            Some(evaluate(
                &model,
                split.x_holdout.view(),
                split.y_holdout.view(),
            )?)
        };

        let report = TrainingReport {
            rows: dataset.len(),
            train_rows: split.y_train.len(),
            holdout_rows: split.y_holdout.len(),
            seed: self.options.seed,
            weights: model.weights.clone(),
            intercept: model.intercept,
            train,
            holdout,
        };
        info!(
            weights = ?report.weights,
            intercept = report.intercept,
            train_r2 = report.train.r2,
            holdout_r2 = ?report.holdout.map(|m| m.r2),
            "fitted linear model"
        );

        let metadata = serde_json::json!({
            "trained_at": Utc::now().to_rfc3339(),
            "dataset": self.options.dataset_path.display().to_string(),
            "rows": report.rows,
            "train_rows": report.train_rows,
            "holdout_rows": report.holdout_rows,
            "holdout_ratio": self.options.holdout_ratio,
            "seed": self.options.seed,
        });

        Ok(FittedArtifacts {
            scaler: scaler
                .with_feature_names(Feature::names())
                .with_metadata(metadata.clone()),
            model: model.with_metadata(metadata),
            report,
        })
    }
}

fn evaluate(
    model: &LinearModel,
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
) -> Result<FitMetrics> {
    let predictions = model.predict_matrix(x)?;
    let rows = y.len();

    let ss_res: f64 = predictions
        .iter()
        .zip(y.iter())
        .map(|(p, t)| (t - p).powi(2))
        .sum();
    let mean = y.mean().unwrap_or(0.0);
    let ss_tot: f64 = y.iter().map(|t| (t - mean).powi(2)).sum();

    // R² is undefined for a constant target; report a perfect fit only if residuals vanish.
    let r2 = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res == 0.0 {
        1.0
    } else {
        0.0
    };
    let rmse = if rows > 0 {
        (ss_res / rows as f64).sqrt()
    } else {
        0.0
    };

    Ok(FitMetrics { rows, r2, rmse })
}
