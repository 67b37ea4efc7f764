//! Fitted artifacts and inference.
//!
//! The scaler and model are small JSON documents so they load fast and stay
//! portable between the trainer and both services.

pub mod artifact;
pub mod linear;
pub mod predictor;
pub mod scaler;

pub use artifact::Artifact;
pub use linear::LinearModel;
pub use predictor::{round2, Predictor};
pub use scaler::StandardScaler;
