//! Tradegate simulation binary.
//!
//! # Usage
//!
//! ```bash
//! # One client, default pacing
//! tradegate-sim
//!
//! # Fifty clients, fast pacing, three rounds each
//! tradegate-sim --clients 50 --max-delay-ms 100 --rounds 3
//!
//! # Settings from a file, with a flag override
//! tradegate-sim --config sim.toml --clients 10
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tradegate_types::SimulationConfig;

/// Tradegate venue simulation
#[derive(Parser, Debug)]
#[command(name = "tradegate-sim")]
#[command(about = "Simulate clients submitting signed orders to a venue server")]
#[command(version)]
struct Args {
    /// Number of client actors
    #[arg(short, long)]
    clients: Option<usize>,

    /// Upper bound of each client's think delay (milliseconds)
    #[arg(long)]
    max_delay_ms: Option<u64>,

    /// Buy/sell/query rounds per client
    #[arg(short, long)]
    rounds: Option<usize>,

    /// Path to a TOML simulation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn simulation_config(&self) -> tradegate_types::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(clients) = self.clients {
            config.clients = clients;
        }
        if let Some(max_delay_ms) = self.max_delay_ms {
            config.max_send_delay_ms = max_delay_ms;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = args.simulation_config()?;
    let report = tradegate_sim::run(config).await?;

    if report.registration_failures > 0 || report.session_failures > 0 {
        tracing::warn!(%report, "Simulation completed with failures");
    }

    Ok(())
}
