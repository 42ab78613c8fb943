//! Configuration constants.
//!
//! Default input locations, the target table, and the column layout of the
//! ranking table.

/// Ranking table read when `--rankings` is not given (tab-separated).
pub const DEFAULT_RANKINGS_PATH: &str = "../top100.csv";

/// Feed table read when `--feeds` is not given (comma-separated).
pub const DEFAULT_FEEDS_PATH: &str = "../feeds.csv";

/// Table targeted by the generated statements.
pub const DEFAULT_TABLE: &str = "feeds";

// Ranking table layout: [rank, domain, ..., author]
/// Ranking column holding the integer rank.
pub const RANK_COLUMN: usize = 0;
/// Ranking column holding the domain (optionally with a path).
pub const DOMAIN_COLUMN: usize = 1;
/// Ranking column holding the author.
pub const AUTHOR_COLUMN: usize = 5;

/// Minimum row width for the insert generator, which also reads the author.
pub const INSERT_MIN_COLUMNS: usize = 6;
/// Minimum row width for the update generator (rank and domain only).
pub const UPDATE_MIN_COLUMNS: usize = 2;

