//! Error types for the breachdepth-sim crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulateError {
    #[error("Network too large: {nodes} nodes exceeds the {max} node limit")]
    TooManyNodes { nodes: usize, max: usize },

    #[error("Network too large: {credentials} credentials exceeds the {max} credential limit")]
    TooManyCredentials { credentials: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, SimulateError>;
