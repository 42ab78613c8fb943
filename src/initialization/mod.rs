//! Process-level setup: logging and the output sink.

mod logger;

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::error_handling::InitializationError;

pub use logger::init_logger_with;

/// Creates (or truncates) the file the generated SQL is written to.
///
/// # Errors
///
/// Returns `InitializationError::OutputError` if the file cannot be created.
pub fn init_output_file(path: &Path) -> Result<File, InitializationError> {
    debug!("Writing SQL to {}", path.display());
    Ok(File::create(path)?)
}
