use thiserror::Error;

/// Top-level error type shared by the breachdepth binaries.
#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, BreachError>;
