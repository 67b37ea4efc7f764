//! Offline training: dataset loading, train/holdout split, and the fit itself.

pub mod dataset;
pub mod split;
pub mod trainer;

pub use dataset::Dataset;
pub use split::{train_test_split, Split};
pub use trainer::{FitMetrics, FittedArtifacts, Trainer, TrainingOptions, TrainingReport};
