//! breachdepth-core: Shared types, configuration, and error handling for breachdepth.
//!
//! This crate provides the foundational types used across all breachdepth components:
//! - Network entities (Node, Edge, Credential) and the attacker profile
//! - Simulation output (AttackPath, SimulationResult)
//! - The privilege tier order
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{BreachConfig, ServerConfig, SimulationConfig};
pub use error::BreachError;
pub use types::{
    AttackPath, Credential, Edge, GraphData, HackerProfile, Node, PrivilegeLevel,
    SimulationResult,
};
