//! breachdepth-api: HTTP surface over the entity store and the simulator.
//!
//! One `InMemoryStore` is shared behind an async `RwLock`; writes take the
//! write lock, simulations and snapshots take the read lock. Each simulation
//! runs with its own engine state.

pub mod demo;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
