//! Conversion command orchestration.
//!
//! Two sequential passes over the input: a line-count pass that sizes
//! the progress bar, then the parse pass that accumulates records and
//! optionally writes the JSON document.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use tabcast_ingest::{estimate_data_rows, read_records};
use tabcast_output::write_json_document;

use crate::progress::IngestProgressBar;
use crate::types::ConvertResult;

/// Run the estimate-then-parse pipeline for one input file.
///
/// When `output` is `None` the records are accumulated and discarded
/// after the scan; the run still reports counts and elapsed time.
pub fn run_convert(file: &Path, output: Option<&Path>) -> Result<ConvertResult> {
    let started = Instant::now();

    let estimate = estimate_data_rows(file).context("estimate rows")?;
    info!(estimate, file = %file.display(), "estimated data rows");

    let progress = IngestProgressBar::new(estimate);
    let batch = read_records(file, &progress).context("read records")?;
    debug!(
        records = batch.records.len(),
        skipped = batch.skipped_rows,
        "parse pass complete"
    );

    if let Some(path) = output {
        info!(
            path = %path.display(),
            records = batch.records.len(),
            "writing JSON document"
        );
        write_json_document(path, &batch.records).context("write output")?;
    }

    Ok(ConvertResult {
        file: file.to_path_buf(),
        output: output.map(Path::to_path_buf),
        estimate,
        records: batch.records.len(),
        skipped_rows: batch.skipped_rows,
        elapsed: started.elapsed(),
    })
}
