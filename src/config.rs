use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
    pub artifacts: ArtifactConfig,
    pub training: TrainingConfig,
    pub server: ServerConfig,
    pub dashboard: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// CSV with TV, Radio, Newspaper and Sales columns
    pub dataset_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactConfig {
    /// Fitted scaler (per-feature mean/std)
    pub scaler_path: PathBuf,
    /// Fitted linear model (weights/intercept)
    pub model_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    /// Fraction of rows held out from the fit (e.g., 0.2 = 20%)
    pub holdout_ratio: f64,
    /// Seed for the train/holdout shuffle
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "127.0.0.1")
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid host {:?}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("data.dataset_path", "advertising.csv")?
            .set_default("artifacts.scaler_path", "artifacts/scaler.json")?
            .set_default("artifacts.model_path", "artifacts/model.json")?
            .set_default("training.holdout_ratio", 0.2)?
            .set_default("training.seed", 42)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("dashboard.host", "127.0.0.1")?
            .set_default("dashboard.port", 8501)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("ADSALES_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (ADSALES__SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("ADSALES")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Built-in defaults, without reading files or the environment
    pub fn default_config() -> Self {
        Self {
            data: DataConfig {
                dataset_path: PathBuf::from("advertising.csv"),
            },
            artifacts: ArtifactConfig {
                scaler_path: PathBuf::from("artifacts/scaler.json"),
                model_path: PathBuf::from("artifacts/model.json"),
            },
            training: TrainingConfig {
                holdout_ratio: 0.2,
                seed: 42,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            dashboard: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8501,
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let ratio = self.training.holdout_ratio;
        if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
            errors.push(format!("holdout_ratio must be in [0, 1), got {ratio}"));
        }

        if self.artifacts.scaler_path == self.artifacts.model_path {
            errors.push("scaler_path and model_path must be different files".to_string());
        }

        for (name, server) in [("server", &self.server), ("dashboard", &self.dashboard)] {
            if server.port == 0 {
                errors.push(format!("{name}.port must be non-zero"));
            }
            if let Err(e) = server.socket_addr() {
                errors.push(format!("{name}: {e}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
