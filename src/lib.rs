pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod ml;
pub mod services;
pub mod training;

pub use config::AppConfig;
pub use domain::{AdSpend, Feature};
pub use error::{AdSalesError, InputError, Result};
pub use ml::{LinearModel, Predictor, StandardScaler};
pub use training::{Trainer, TrainingOptions, TrainingReport};
