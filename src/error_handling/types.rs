//! Error type definitions.

use std::num::ParseIntError;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error opening the output sink.
    #[error("Output file creation error: {0}")]
    OutputError(#[from] std::io::Error),
}

/// Error types for loading the ranking and feed tables.
///
/// Short ranking rows are not errors (they are skipped); everything here
/// aborts the run.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The CSV/TSV reader rejected a record (bad quoting, missing header, I/O).
    #[error("Malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// The rank column held something other than an integer.
    #[error("Invalid rank {value:?} on line {line}: {source}")]
    InvalidRank {
        /// 1-based line number in the ranking table
        line: u64,
        /// Raw rank text
        value: String,
        /// Integer parse failure
        #[source]
        source: ParseIntError,
    },
}
