use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "adsales")]
#[command(version)]
#[command(about = "Sales prediction from advertising spend: trainer, prediction API, dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (default.toml, $ADSALES_ENV.toml)
    #[arg(short, long, default_value = "config", global = true)]
    pub config: PathBuf,

    /// Emit JSON formatted logs
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fit the scaler and linear model, then write both artifacts
    Train {
        /// CSV with TV, Radio, Newspaper and Sales columns
        #[arg(long)]
        data: Option<PathBuf>,
        /// Fraction of rows held out from the fit (0 keeps every row)
        #[arg(long)]
        holdout_ratio: Option<f64>,
        /// Seed for the train/holdout shuffle
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        artifacts: ArtifactArgs,
    },
    /// Serve the JSON prediction API and HTML form
    Serve {
        #[command(flatten)]
        listen: ListenArgs,
        #[command(flatten)]
        artifacts: ArtifactArgs,
    },
    /// Serve the interactive dashboard
    Dashboard {
        #[command(flatten)]
        listen: ListenArgs,
        #[command(flatten)]
        artifacts: ArtifactArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// Scaler artifact path
    #[arg(long)]
    pub scaler: Option<PathBuf>,
    /// Model artifact path
    #[arg(long)]
    pub model: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListenArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Apply command-line flags on top of the loaded configuration.
    pub fn apply_overrides(&self, cfg: &mut AppConfig) {
        if self.json_logs {
            cfg.logging.json = true;
        }

        match &self.command {
            Commands::Train {
                data,
                holdout_ratio,
                seed,
                artifacts,
            } => {
                if let Some(data) = data {
                    cfg.data.dataset_path = data.clone();
                }
                if let Some(ratio) = holdout_ratio {
                    cfg.training.holdout_ratio = *ratio;
                }
                if let Some(seed) = seed {
                    cfg.training.seed = *seed;
                }
                artifacts.apply(cfg);
            }
            Commands::Serve { listen, artifacts } => {
                if let Some(host) = &listen.host {
                    cfg.server.host = host.clone();
                }
                if let Some(port) = listen.port {
                    cfg.server.port = port;
                }
                artifacts.apply(cfg);
            }
            Commands::Dashboard { listen, artifacts } => {
                if let Some(host) = &listen.host {
                    cfg.dashboard.host = host.clone();
                }
                if let Some(port) = listen.port {
                    cfg.dashboard.port = port;
                }
                artifacts.apply(cfg);
            }
        }
    }
}

impl ArtifactArgs {
    fn apply(&self, cfg: &mut AppConfig) {
        if let Some(scaler) = &self.scaler {
            cfg.artifacts.scaler_path = scaler.clone();
        }
        if let Some(model) = &self.model {
            cfg.artifacts.model_path = model.clone();
        }
    }
}
