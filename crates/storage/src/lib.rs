//! Storage layer for the ChemFlow desktop client
//!
//! This crate owns everything that survives a process restart: the persisted
//! application-state schema and the versioned, checksummed state file it is
//! written to.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app_state;
pub mod state_file;

pub use app_state::{AppPersistedState, ColorMode, RememberedUser};
pub use state_file::{StateFile, StateFileConfig, StorageError};

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
