//! Ranking table: loading and first-match lookup.
//!
//! The ranking table is a tab-separated file with a header row and the layout
//! `[rank, domain, ..., author]`. Entries are kept in file order because the
//! lookup returns the *first* entry whose domain matches, so the order decides
//! ties between overlapping entries (e.g. `example.com` and `blog.example.com`).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::config::{AUTHOR_COLUMN, DOMAIN_COLUMN, RANK_COLUMN};
use crate::domain::domains_match;
use crate::error_handling::LoadError;

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    /// Lower-cased, trimmed domain text (may carry a path, e.g. `devblogs.microsoft.com/oldnewthing`)
    pub domain: String,
    /// Popularity rank
    pub rank: i64,
    /// Author column, when present and non-empty
    pub author: Option<String>,
}

/// Ranking entries in source order, unique by domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rankings {
    entries: Vec<RankingEntry>,
}

impl Rankings {
    /// Creates an empty ranking set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, keyed by its domain.
    ///
    /// A repeated domain replaces the stored rank and author but keeps the
    /// position of the first occurrence.
    pub fn insert(&mut self, entry: RankingEntry) {
        match self.entries.iter_mut().find(|e| e.domain == entry.domain) {
            Some(existing) => {
                debug!(
                    "Duplicate ranking for {}: rank {} replaces {}",
                    entry.domain, entry.rank, existing.rank
                );
                *existing = entry;
            }
            None => self.entries.push(entry),
        }
    }

    /// Number of distinct ranked domains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &RankingEntry> {
        self.entries.iter()
    }

    /// Returns the first entry (in source order) whose domain matches `feed_domain`.
    pub fn find_entry(&self, feed_domain: &str) -> Option<&RankingEntry> {
        self.entries
            .iter()
            .find(|entry| domains_match(feed_domain, &entry.domain))
    }

    /// Returns the rank of the first entry whose domain matches `feed_domain`.
    pub fn find_rank(&self, feed_domain: &str) -> Option<i64> {
        self.find_entry(feed_domain).map(|entry| entry.rank)
    }
}

impl FromIterator<RankingEntry> for Rankings {
    fn from_iter<I: IntoIterator<Item = RankingEntry>>(iter: I) -> Self {
        let mut rankings = Rankings::new();
        for entry in iter {
            rankings.insert(entry);
        }
        rankings
    }
}

/// Loads the ranking table from a file.
///
/// # Errors
///
/// Returns `LoadError::Open` if the file cannot be opened, and otherwise the
/// same errors as [`read_rankings`].
pub fn load_rankings(path: &Path, min_columns: usize) -> Result<Rankings, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_rankings(file, min_columns)
}

/// Reads a tab-separated ranking table.
///
/// The first row is a header and is skipped. Rows with fewer than
/// `min_columns` fields are skipped without error.
///
/// # Errors
///
/// Returns `LoadError::Csv` if a record cannot be read and
/// `LoadError::InvalidRank` if the rank column is not an integer.
pub fn read_rankings<R: Read>(reader: R, min_columns: usize) -> Result<Rankings, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rankings = Rankings::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        // Rank and domain are always required, whatever the caller asked for
        if record.len() < min_columns.max(DOMAIN_COLUMN + 1) {
            debug!(
                "Skipping ranking line {line}: {} column(s), need {min_columns}",
                record.len()
            );
            skipped += 1;
            continue;
        }

        let raw_rank = &record[RANK_COLUMN];
        let rank = raw_rank
            .trim()
            .parse::<i64>()
            .map_err(|source| LoadError::InvalidRank {
                line,
                value: raw_rank.to_string(),
                source,
            })?;

        let author = record
            .get(AUTHOR_COLUMN)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        rankings.insert(RankingEntry {
            domain: record[DOMAIN_COLUMN].trim().to_lowercase(),
            rank,
            author,
        });
    }

    debug!(
        "Loaded {} ranking(s), skipped {} short row(s)",
        rankings.len(),
        skipped
    );
    Ok(rankings)
}
