//! SQL text rendering for the generated statements.
//!
//! Nothing here talks to a database; values are inlined as escaped literals.

use crate::feeds::Feed;

/// Renders an optional text value as a SQL literal.
///
/// `None` becomes `NULL`; text is single-quoted with embedded quotes doubled.
pub fn sql_literal(value: Option<&str>) -> String {
    match value {
        Some(s) => format!("'{}'", s.replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

/// Renders an optional rank as a SQL integer literal or `NULL`.
pub fn rank_literal(rank: Option<i64>) -> String {
    rank.map_or_else(|| "NULL".to_string(), |r| r.to_string())
}

/// Builds the idempotent insert for one feed.
pub fn insert_statement(table: &str, feed: &Feed, rank: Option<i64>) -> String {
    format!(
        "INSERT OR IGNORE INTO {table} (name, url, domain, rank) VALUES ({}, {}, {}, {});",
        sql_literal(Some(&feed.name)),
        sql_literal(Some(&feed.url)),
        sql_literal(Some(&feed.domain)),
        rank_literal(rank)
    )
}

/// Builds the rank update for the feed stored under `url`.
pub fn update_statement(table: &str, url: &str, rank: i64) -> String {
    format!(
        "UPDATE {table} SET rank = {rank} WHERE url = {};",
        sql_literal(Some(url))
    )
}
