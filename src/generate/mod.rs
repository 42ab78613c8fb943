//! SQL statement generators.
//!
//! Both generators drive the ranking lookup over the loaded feeds and stream
//! statements to any `Write` sink:
//! - insert: `INSERT OR IGNORE` for every feed, NULL rank when unmatched
//! - update: `UPDATE ... WHERE url = ...` for matched feeds only

mod insert;
mod types;
mod update;

use std::io::{self, Write};

use crate::config::GenerateMode;
use crate::feeds::Feed;
use crate::ranking::Rankings;

pub use insert::generate_inserts;
pub use types::GenerateReport;
pub use update::generate_updates;

/// Runs the generator selected by `mode`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn generate<W: Write>(
    mode: GenerateMode,
    out: &mut W,
    table: &str,
    rankings: &Rankings,
    feeds: &[Feed],
) -> io::Result<GenerateReport> {
    match mode {
        GenerateMode::Insert => generate_inserts(out, table, rankings, feeds),
        GenerateMode::Update => generate_updates(out, table, rankings, feeds),
    }
}
