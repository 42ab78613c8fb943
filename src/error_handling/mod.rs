//! Error types for initialization and table loading.
//!
//! Library functions return these typed errors; the run orchestration wraps
//! them with `anyhow` context on the way up.

mod types;

pub use types::{InitializationError, LoadError};
