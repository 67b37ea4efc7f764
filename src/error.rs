use std::path::PathBuf;
use thiserror::Error;

/// Main error type for training and inference
#[derive(Error, Debug)]
pub enum AdSalesError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Dataset errors
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Non-numeric value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Dataset contains no rows")]
    EmptyDataset,

    // Artifact errors
    #[error("Missing model files: {} not found (run `adsales train` first)", .0.display())]
    MissingArtifact(PathBuf),

    #[error("Invalid artifact {}: {reason}", path.display())]
    InvalidArtifact { path: PathBuf, reason: String },

    // Request input errors
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Model fit failed: {0}")]
    Fit(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for AdSalesError
pub type Result<T> = std::result::Result<T, AdSalesError>;

/// Client-side input problems for a single prediction request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing field '{0}'")]
    Missing(&'static str),

    #[error("field '{field}' must be a number, got {value}")]
    NotNumeric { field: &'static str, value: String },

    #[error("inputs are too large to score")]
    OutOfRange,

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("malformed JSON body: {0}")]
    MalformedBody(String),
}

impl AdSalesError {
    /// Whether the error was caused by caller-supplied input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AdSalesError::Input(_) | AdSalesError::Validation(_))
    }
}
