//! Feed table loading.
//!
//! The feed table is a comma-separated file whose header names at least the
//! `name` and `url` columns. Extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::domain::extract_domain;
use crate::error_handling::LoadError;

/// A syndication source with the domain derived from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    /// Display name
    pub name: String,
    /// Feed URL as given (trimmed)
    pub url: String,
    /// Authority of `url`, lower-cased, without a leading `www.`
    pub domain: String,
}

impl Feed {
    /// Builds a feed from trimmed name/url text, deriving its domain.
    pub fn new(name: &str, url: &str) -> Self {
        let url = url.trim();
        Self {
            name: name.trim().to_string(),
            url: url.to_string(),
            domain: extract_domain(url),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedRow {
    name: String,
    url: String,
}

/// Loads the feed table from a file.
///
/// # Errors
///
/// Returns `LoadError::Open` if the file cannot be opened, and otherwise the
/// same errors as [`read_feeds`].
pub fn load_feeds(path: &Path) -> Result<Vec<Feed>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_feeds(file)
}

/// Reads a comma-separated feed table.
///
/// Rows with an empty URL are dropped.
///
/// # Errors
///
/// Returns `LoadError::Csv` if the header lacks `name` or `url`, or a row
/// cannot be decoded.
pub fn read_feeds<R: Read>(reader: R) -> Result<Vec<Feed>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut feeds = Vec::new();
    for result in reader.deserialize::<FeedRow>() {
        let row = result?;
        if row.url.trim().is_empty() {
            debug!("Skipping feed {:?}: empty URL", row.name.trim());
            continue;
        }
        feeds.push(Feed::new(&row.name, &row.url));
    }

    Ok(feeds)
}
