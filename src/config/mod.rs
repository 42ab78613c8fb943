//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths, table name and ranking table layout
//! - Configuration types shared by the library and the CLI

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, GenerateMode, LogFormat, LogLevel};
