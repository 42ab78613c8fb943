//! feed_rank library: rank annotation of feed records
//!
//! Cross-references a feed table against a domain ranking table and emits SQL
//! statements (`INSERT OR IGNORE` or `UPDATE`) carrying each feed's rank. The
//! heart of it is the domain heuristic in [`domains_match`]: exact match,
//! subdomain in either direction, or a ranked entry that carries a blog path.
//!
//! # Example
//!
//! ```no_run
//! use feed_rank::{run_generate, Config, GenerateMode};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     mode: GenerateMode::Insert,
//!     rankings_path: PathBuf::from("top100.csv"),
//!     feeds_path: PathBuf::from("feeds.csv"),
//!     output: Some(PathBuf::from("import.sql")),
//!     ..Default::default()
//! };
//!
//! let report = run_generate(config)?;
//! println!("{} ranked, {} unranked", report.matched, report.unmatched);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error_handling;
pub mod feeds;
pub mod generate;
pub mod initialization;
pub mod ranking;
pub mod sql;

// Re-export public API
pub use config::{Config, GenerateMode, LogFormat, LogLevel};
pub use domain::{domains_match, extract_domain, normalize_domain};
pub use feeds::Feed;
pub use generate::GenerateReport;
pub use ranking::{RankingEntry, Rankings};
pub use run::{run_generate, run_generate_to};

// Internal run module (loads both tables, then streams statements)
mod run {
    use std::io::{self, BufWriter, Write};

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::feeds::{load_feeds, Feed};
    use crate::generate::{generate, GenerateReport};
    use crate::initialization::init_output_file;
    use crate::ranking::{load_rankings, Rankings};

    /// Runs a generator with the provided configuration.
    ///
    /// Reads both input tables fully, then writes the statements to
    /// `config.output`, or to stdout when no output file is set. The output
    /// file is only created once both tables have loaded.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Either input file cannot be opened or decoded
    /// - A ranking row has a non-numeric rank
    /// - The output cannot be created or written
    pub fn run_generate(config: Config) -> Result<GenerateReport> {
        let (rankings, feeds) = load_inputs(&config)?;
        match &config.output {
            Some(path) => {
                let file = init_output_file(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_statements(&config, &rankings, &feeds, BufWriter::new(file))
            }
            None => {
                let stdout = io::stdout();
                write_statements(&config, &rankings, &feeds, BufWriter::new(stdout.lock()))
            }
        }
    }

    /// Runs a generator, writing the statements to `out`.
    ///
    /// `config.output` is ignored. `out` is flushed before returning.
    ///
    /// # Errors
    ///
    /// Same as [`run_generate`], minus output file creation.
    pub fn run_generate_to<W: Write>(config: &Config, out: W) -> Result<GenerateReport> {
        let (rankings, feeds) = load_inputs(config)?;
        write_statements(config, &rankings, &feeds, out)
    }

    fn load_inputs(config: &Config) -> Result<(Rankings, Vec<Feed>)> {
        let rankings = load_rankings(&config.rankings_path, config.mode.min_ranking_columns())
            .context("Failed to load ranking table")?;
        let feeds = load_feeds(&config.feeds_path).context("Failed to load feed table")?;
        info!(
            "Loaded {} rankings from {} and {} feeds from {}",
            rankings.len(),
            config.rankings_path.display(),
            feeds.len(),
            config.feeds_path.display()
        );
        Ok((rankings, feeds))
    }

    fn write_statements<W: Write>(
        config: &Config,
        rankings: &Rankings,
        feeds: &[Feed],
        mut out: W,
    ) -> Result<GenerateReport> {
        let report = generate(config.mode, &mut out, &config.table, rankings, feeds)
            .context("Failed to write SQL statements")?;
        out.flush().context("Failed to flush SQL output")?;

        info!(
            "Generated {} statements: {} ranked, {} unranked",
            report.mode, report.matched, report.unmatched
        );
        Ok(report)
    }
}
