mod config; // brings `config.rs` in as `crate::config`
mod scenario; // brings `scenario.rs` in as `crate::scenario`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{self, EnvFilter};

use furrow_navigation::{PlanResponse, plan};

use crate::config::Settings;

/// Plan a field drone route from a scenario file.
#[derive(Debug, Parser)]
#[command(name = "furrow", version, about)]
struct Cli {
    /// Settings file layered over config/default.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Algorithm to run instead of the one in the scenario
    #[arg(short, long)]
    algorithm: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = config::load_settings(cli.config.as_deref())
        .context("Failed to load configuration")?;

    init_tracing(&settings.logging.level);
    info!(config = ?cli.config, "Furrow planner started");

    let runtime = tokio::runtime::Runtime::new().context("Failed to start Tokio runtime")?;
    let result = runtime.block_on(run(cli.algorithm, settings));
    // A search that overran its deadline still holds a blocking thread.
    runtime.shutdown_background();

    match result {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            error!("Planning failed: {:#}", e);
            Err(e)
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one planning call on the blocking pool under the configured deadline.
async fn run(algorithm: Option<String>, settings: Settings) -> anyhow::Result<PlanResponse> {
    let request = settings.scenario.into_request(algorithm.as_deref())?;
    info!(
        algorithm = %request.algorithm,
        width = request.grid.width(),
        height = request.grid.height(),
        goals = request.goals.as_ref().map_or(0, Vec::len),
        "Planning request ready"
    );
    debug!("Field:\n{}", request.grid);

    let timeout_ms = settings.planner.timeout_ms;
    let handle = tokio::task::spawn_blocking(move || plan(&request));

    match tokio::time::timeout(Duration::from_millis(timeout_ms), handle).await {
        Ok(joined) => Ok(joined.context("Planner task panicked")??),
        Err(_) => bail!("Planner exceeded its deadline of {} ms", timeout_ms),
    }
}
