//! breachdepth-store: entity repository for breachdepth networks.
//!
//! This crate is the single mutation point for nodes, edges, and credentials.
//! Writes are validated here (duplicate ids, dangling references) so the
//! simulation engine only ever reads a consistent network.

pub mod mutations;
pub mod queries;
pub mod store;

pub use store::{EntityKind, InMemoryStore, Repository, StoreError};
