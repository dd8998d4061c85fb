//! Application state for the ChemFlow desktop client
//!
//! This crate holds the cross-component state the shell owns: the session
//! (authenticated user or anonymous/local mode) and the application context
//! object that carries session, visual mode, and their persistence. There are
//! no ambient globals; tests construct isolated contexts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod session;

pub use context::AppContext;
pub use session::Session;
