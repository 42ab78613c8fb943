//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `feed_rank` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status on failure
//!
//! All matching and SQL generation is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use feed_rank::config::{DEFAULT_FEEDS_PATH, DEFAULT_RANKINGS_PATH, DEFAULT_TABLE};
use feed_rank::initialization::init_logger_with;
use feed_rank::{run_generate, Config, GenerateMode, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "feed_rank",
    version,
    about = "Annotate feed records with domain popularity ranks as SQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Emit INSERT OR IGNORE statements for every feed
    Insert(GenerateArgs),
    /// Emit UPDATE statements for feeds that match a ranking
    Update(GenerateArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Tab-separated ranking table ([rank, domain, ..., author], header row skipped)
    #[arg(long, default_value = DEFAULT_RANKINGS_PATH)]
    rankings: PathBuf,

    /// Comma-separated feed table with `name` and `url` columns
    #[arg(long, default_value = DEFAULT_FEEDS_PATH)]
    feeds: PathBuf,

    /// Table name used in the generated SQL
    #[arg(long, default_value = DEFAULT_TABLE)]
    table: String,

    /// Write SQL to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl Command {
    fn into_config(self) -> Config {
        let (mode, args) = match self {
            Command::Insert(args) => (GenerateMode::Insert, args),
            Command::Update(args) => (GenerateMode::Update, args),
        };
        Config {
            mode,
            rankings_path: args.rankings,
            feeds_path: args.feeds,
            table: args.table,
            output: args.output,
            log_level: args.log_level,
            log_format: args.log_format,
        }
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().command.into_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_generate(config) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("feed_rank error: {:#}", e);
            process::exit(1);
        }
    }
}
