use adsales::api::{self, AppState};
use adsales::cli::{Cli, Commands};
use adsales::config::{AppConfig, LoggingConfig};
use adsales::dashboard::{self, DashboardState};
use adsales::error::{AdSalesError, Result};
use adsales::ml::Predictor;
use adsales::services::{self, ArtifactSummary, HealthState};
use adsales::training::{Trainer, TrainingOptions};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut cfg = AppConfig::load_from(&cli.config)?;
    cli.apply_overrides(&mut cfg);
    init_logging(&cfg.logging);

    if let Err(errors) = cfg.validate() {
        return Err(AdSalesError::Validation(errors.join("; ")));
    }

    match &cli.command {
        Commands::Train { .. } => run_train(&cfg),
        Commands::Serve { .. } => run_serve(&cfg).await,
        Commands::Dashboard { .. } => run_dashboard(&cfg).await,
    }
}

fn run_train(cfg: &AppConfig) -> Result<()> {
    let trainer = Trainer::new(TrainingOptions::from(cfg));
    let report = trainer.run()?;

    if let Some(holdout) = report.holdout {
        info!(
            rows = holdout.rows,
            r2 = holdout.r2,
            rmse = holdout.rmse,
            "holdout fit"
        );
    }
    println!(
        "Success: {} and {} have been created.",
        trainer.options().scaler_path.display(),
        trainer.options().model_path.display()
    );
    Ok(())
}

/// Load artifacts once; every request shares the same immutable predictor.
fn load_predictor(
    cfg: &AppConfig,
    service: &'static str,
) -> Result<(Arc<Predictor>, Arc<HealthState>)> {
    let predictor = Predictor::load(&cfg.artifacts.scaler_path, &cfg.artifacts.model_path)?;
    let summary = ArtifactSummary::new(&predictor, &cfg.artifacts);
    Ok((
        Arc::new(predictor),
        Arc::new(HealthState::new(service, summary)),
    ))
}

async fn run_serve(cfg: &AppConfig) -> Result<()> {
    let (predictor, health) = load_predictor(cfg, "api")?;
    let app = api::create_router(AppState::new(predictor, health));
    services::serve("prediction API", cfg.server.socket_addr()?, app).await
}

async fn run_dashboard(cfg: &AppConfig) -> Result<()> {
    let (predictor, health) = load_predictor(cfg, "dashboard")?;
    let app = dashboard::create_router(DashboardState::new(predictor, health));
    services::serve("dashboard", cfg.dashboard.socket_addr()?, app).await
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},adsales=debug", logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Failed to initialise logging: {}", e);
    }
}
