//! Configuration management for breachdepth services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (BREACHDEPTH__ prefix, `__` separator)
//! 2. Config file (`<prefix>.toml`, default `breachdepth.toml`)
//! 3. Defaults

use serde::Deserialize;

use crate::error::{BreachError, Result};

/// Top-level configuration shared by the breachdepth binaries.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BreachConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port (default: 8000).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Load the built-in demo network at startup.
    #[serde(default)]
    pub seed_demo: bool,
}

/// Size caps applied before a simulation runs.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,

    #[serde(default = "default_max_credentials")]
    pub max_credentials: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_nodes() -> usize {
    10_000
}

fn default_max_credentials() -> usize {
    10_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_demo: false,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_nodes: default_max_nodes(),
            max_credentials: default_max_credentials(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl BreachConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) and the environment.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("BREACHDEPTH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: BreachConfig = cfg.try_deserialize()?;
        loaded.validate()?;
        tracing::debug!(config = ?loaded, "Configuration loaded");
        Ok(loaded)
    }

    /// Reject settings no simulation could run under.
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_nodes == 0 {
            return Err(BreachError::Invalid(
                "simulation.max_nodes must be greater than zero".to_string(),
            ));
        }
        if self.simulation.max_credentials == 0 {
            return Err(BreachError::Invalid(
                "simulation.max_credentials must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
