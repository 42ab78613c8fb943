//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

use crate::config::constants::{
    DEFAULT_FEEDS_PATH, DEFAULT_RANKINGS_PATH, DEFAULT_TABLE, INSERT_MIN_COLUMNS,
    UPDATE_MIN_COLUMNS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which kind of SQL statements a run produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GenerateMode {
    /// One `INSERT OR IGNORE` per feed, NULL rank when unmatched
    Insert,
    /// One `UPDATE` per matched feed, keyed by URL
    Update,
}

impl GenerateMode {
    /// Minimum number of columns a ranking row needs to be loaded in this mode.
    pub fn min_ranking_columns(self) -> usize {
        match self {
            GenerateMode::Insert => INSERT_MIN_COLUMNS,
            GenerateMode::Update => UPDATE_MIN_COLUMNS,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use feed_rank::{Config, GenerateMode};
/// use std::path::PathBuf;
///
/// let config = Config {
///     mode: GenerateMode::Update,
///     rankings_path: PathBuf::from("top100.csv"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Statement kind to generate
    pub mode: GenerateMode,

    /// Tab-separated ranking table
    pub rankings_path: PathBuf,

    /// Comma-separated feed table
    pub feeds_path: PathBuf,

    /// Table name used in the generated SQL
    pub table: String,

    /// Output file (stdout if None)
    pub output: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GenerateMode::Insert,
            rankings_path: PathBuf::from(DEFAULT_RANKINGS_PATH),
            feeds_path: PathBuf::from(DEFAULT_FEEDS_PATH),
            table: DEFAULT_TABLE.to_string(),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_generate_mode_display() {
        assert_eq!(GenerateMode::Insert.to_string(), "insert");
        assert_eq!(GenerateMode::Update.to_string(), "update");
    }

    #[test]
    fn test_min_ranking_columns() {
        // Insert reads the author column, update only needs rank and domain
        assert_eq!(GenerateMode::Insert.min_ranking_columns(), 6);
        assert_eq!(GenerateMode::Update.min_ranking_columns(), 2);
        for mode in GenerateMode::iter() {
            assert!(mode.min_ranking_columns() >= 2);
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.mode, GenerateMode::Insert);
        assert_eq!(config.rankings_path, PathBuf::from("../top100.csv"));
        assert_eq!(config.feeds_path, PathBuf::from("../feeds.csv"));
        assert_eq!(config.table, "feeds");
        assert!(config.output.is_none());
        assert!(matches!(config.log_level, LogLevel::Info));
        assert!(matches!(config.log_format, LogFormat::Plain));
    }
}
