// Shared test helpers for writing input tables to temporary files.

use std::fs;
use std::path::PathBuf;

use feed_rank::{Config, GenerateMode};
use tempfile::TempDir;

/// Header row of the ranking table (skipped by the loader).
pub const RANKING_HEADER: &str = "rank\tdomain\ttitle\tposts\tscore\tauthor";

/// Writes a ranking table and a feed table into a fresh temp dir.
///
/// `rankings` are tab-separated data rows (no header); `feeds` are
/// comma-separated data rows under a `name,url` header.
pub fn write_inputs(rankings: &[&str], feeds: &[&str]) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let rankings_path = dir.path().join("top100.csv");
    let mut ranking_text = String::from(RANKING_HEADER);
    ranking_text.push('\n');
    for row in rankings {
        ranking_text.push_str(row);
        ranking_text.push('\n');
    }
    fs::write(&rankings_path, ranking_text).expect("Failed to write ranking table");

    let feeds_path = dir.path().join("feeds.csv");
    let mut feed_text = String::from("name,url\n");
    for row in feeds {
        feed_text.push_str(row);
        feed_text.push('\n');
    }
    fs::write(&feeds_path, feed_text).expect("Failed to write feed table");

    (dir, rankings_path, feeds_path)
}

/// Builds a config pointing at the given inputs.
#[allow(dead_code)] // Not every test file builds configs
pub fn config_for(mode: GenerateMode, rankings: PathBuf, feeds: PathBuf) -> Config {
    Config {
        mode,
        rankings_path: rankings,
        feeds_path: feeds,
        ..Default::default()
    }
}
