//! Result types shared between commands and summary rendering.

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct ConvertResult {
    /// Input file that was converted.
    pub file: PathBuf,
    /// Output document path, when one was written.
    pub output: Option<PathBuf>,
    /// Advisory row estimate from the sizing pass.
    pub estimate: u64,
    /// Number of records accepted by the parser.
    pub records: usize,
    /// Rows dropped for field-count mismatches or parse errors.
    pub skipped_rows: usize,
    /// Wall-clock time for the parse-and-write pass.
    pub elapsed: Duration,
}
