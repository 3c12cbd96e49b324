//! CLI entry point for one-shot breachdepth simulations.
//!
//! Reads a scenario JSON (`{"graph": ..., "profile": ...}`) from stdin and
//! writes a JSON result to stdout. Logs go to stderr.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use breachdepth_core::BreachConfig;
use breachdepth_sim::{load_scenario, summarize, Scenario, Simulator};

#[derive(Parser)]
#[command(name = "breachdepth-sim")]
#[command(about = "Simulate lateral movement through a network from a set of stolen credentials")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: breachdepth).
    #[arg(short, long, default_value = "breachdepth", global = true)]
    config: String,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run one simulation (reads scenario JSON from stdin).
    Simulate,
    /// Load and validate a scenario without simulating (reads JSON from stdin).
    Validate,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = BreachConfig::load(&cli.config)?;

    let input = std::io::read_to_string(std::io::stdin())?;
    let scenario: Scenario = serde_json::from_str(&input)?;
    let (store, profile) = load_scenario(scenario)?;

    match cli.command {
        Command::Simulate => {
            let simulator = Simulator::new().with_limits(config.simulation);
            let result = simulator.simulate(&store, &profile)?;
            emit(&result, cli.pretty)?;
        }
        Command::Validate => {
            emit(&summarize(&store, &profile), cli.pretty)?;
        }
    }

    Ok(())
}

fn emit<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
