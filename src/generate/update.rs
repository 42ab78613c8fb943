//! `UPDATE` generation: one statement per matched feed.

use std::io::{self, Write};

use log::debug;

use crate::config::GenerateMode;
use crate::feeds::Feed;
use crate::ranking::Rankings;
use crate::sql::update_statement;

use super::types::GenerateReport;

/// Writes a rank update, keyed by exact URL, for every feed that matches a ranking.
///
/// Unmatched feeds produce no statement but are counted in the report.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn generate_updates<W: Write>(
    out: &mut W,
    table: &str,
    rankings: &Rankings,
    feeds: &[Feed],
) -> io::Result<GenerateReport> {
    let mut report = GenerateReport::new(GenerateMode::Update, rankings.len(), feeds.len());

    for feed in feeds.iter().filter(|f| !f.url.is_empty()) {
        let rank = rankings.find_rank(&feed.domain);
        debug!("{} ({}) -> rank {:?}", feed.url, feed.domain, rank);
        report.record(rank);
        if let Some(rank) = rank {
            writeln!(out, "{}", update_statement(table, &feed.url, rank))?;
        }
    }

    writeln!(out, "-- Matched {} feeds to rankings", report.matched)?;

    Ok(report)
}
