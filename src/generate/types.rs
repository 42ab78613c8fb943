//! Generator result types.

use crate::config::GenerateMode;

/// Tally of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Statement kind that was generated
    pub mode: GenerateMode,
    /// Number of distinct ranked domains loaded
    pub rankings: usize,
    /// Number of feeds with a non-empty URL
    pub feeds: usize,
    /// Feeds that matched a ranking entry
    pub matched: usize,
    /// Feeds that matched nothing
    pub unmatched: usize,
}

impl GenerateReport {
    pub(crate) fn new(mode: GenerateMode, rankings: usize, feeds: usize) -> Self {
        Self {
            mode,
            rankings,
            feeds,
            matched: 0,
            unmatched: 0,
        }
    }

    pub(crate) fn record(&mut self, rank: Option<i64>) {
        match rank {
            Some(_) => self.matched += 1,
            None => self.unmatched += 1,
        }
    }
}
