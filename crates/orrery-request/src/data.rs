//! Data layer: immutable request state, snapshots and configuration.

mod config;
mod snapshot;
mod state;

pub use config::ClientConfig;
pub use snapshot::Snapshot;
pub use state::{RequestState, STATUS_OK, STATUS_UNKNOWN_NETWORK_ERROR};
