//! HTTP server entry point for breachdepth.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use breachdepth_api::{demo, serve, AppState};
use breachdepth_core::BreachConfig;
use breachdepth_sim::Simulator;
use breachdepth_store::InMemoryStore;

#[derive(Parser)]
#[command(name = "breachdepth-api")]
#[command(about = "HTTP service for modelling a network and simulating attacker lateral movement")]
struct Cli {
    /// Config file prefix (default: breachdepth).
    #[arg(short, long, default_value = "breachdepth")]
    config: String,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Load the demo network at startup.
    #[arg(long)]
    seed_demo: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let mut config = BreachConfig::load(&cli.config)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.server.seed_demo |= cli.seed_demo;

    let mut store = InMemoryStore::new();
    if config.server.seed_demo {
        demo::seed(&mut store)?;
    }

    let simulator = Simulator::new().with_limits(config.simulation);
    tracing::info!(
        max_nodes = simulator.limits().max_nodes,
        max_credentials = simulator.limits().max_credentials,
        empty_store = store.is_empty(),
        "Configuration loaded"
    );

    let state = AppState::new(store, simulator);
    serve(state, &config.server.bind_addr()).await?;

    Ok(())
}
