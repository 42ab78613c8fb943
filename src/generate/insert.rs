//! `INSERT OR IGNORE` generation: one statement per feed.

use std::io::{self, Write};

use log::debug;

use crate::config::GenerateMode;
use crate::feeds::Feed;
use crate::ranking::Rankings;
use crate::sql::insert_statement;

use super::types::GenerateReport;

/// Writes an insert for every feed, with a NULL rank when no ranking matches.
///
/// The statements are framed by `--` comment lines: a load summary and section
/// header before, a matched/unmatched summary after.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn generate_inserts<W: Write>(
    out: &mut W,
    table: &str,
    rankings: &Rankings,
    feeds: &[Feed],
) -> io::Result<GenerateReport> {
    let mut report = GenerateReport::new(GenerateMode::Insert, rankings.len(), feeds.len());

    writeln!(
        out,
        "-- Loaded {} rankings and {} feeds",
        rankings.len(),
        feeds.len()
    )?;
    writeln!(out)?;
    writeln!(out, "-- Feed inserts")?;
    writeln!(out)?;

    for feed in feeds {
        let rank = rankings.find_rank(&feed.domain);
        debug!("{} ({}) -> rank {:?}", feed.name, feed.domain, rank);
        report.record(rank);
        writeln!(out, "{}", insert_statement(table, feed, rank))?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "-- Summary: {} ranked feeds, {} unranked feeds",
        report.matched, report.unmatched
    )?;

    Ok(report)
}
