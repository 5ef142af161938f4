//! Streaming CSV record reader.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::warn;

use crate::error::{IngestError, Result};
use crate::progress::RowProgress;

/// One parsed data row keyed by lowercased header name.
pub type Record = BTreeMap<String, String>;

/// Parsed contents of one delimited file.
#[derive(Debug, Clone)]
pub struct RecordBatch {
    /// Lowercased header names in input column order.
    pub headers: Vec<String>,
    /// Accepted data rows in input order.
    pub records: Vec<Record>,
    /// Rows dropped for field-count mismatches or CSV parse errors.
    pub skipped_rows: usize,
}

/// Read every data row of `path` into records keyed by lowercased headers.
///
/// The first record is the header row; an empty input is an error. Rows
/// whose field count differs from the header count and rows the CSV
/// parser rejects are skipped and counted instead of aborting the scan,
/// so `records.len() + skipped_rows` equals the number of data rows
/// encountered. `progress` receives one advance per accepted row.
pub fn read_records(path: &Path, progress: &dyn RowProgress) -> Result<RecordBatch> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = reader.records();
    let headers = match rows.next() {
        Some(Ok(record)) => lowercase_headers(&record),
        Some(Err(source)) => {
            return Err(IngestError::HeaderParse {
                path: path.to_path_buf(),
                source,
            });
        }
        None => {
            return Err(IngestError::EmptyInput {
                path: path.to_path_buf(),
            });
        }
    };

    let mut records = Vec::new();
    let mut skipped_rows = 0usize;
    for (index, row) in rows.enumerate() {
        // Data rows start on line 2 of the input.
        let line = index + 2;
        match row {
            Ok(record) if record.len() == headers.len() => {
                let mut values = Record::new();
                for (header, value) in headers.iter().zip(record.iter()) {
                    values.insert(header.clone(), value.to_string());
                }
                records.push(values);
                progress.advance();
            }
            Ok(record) => {
                skipped_rows += 1;
                warn!(
                    line,
                    fields = record.len(),
                    expected = headers.len(),
                    "skipping row with mismatched field count"
                );
            }
            Err(error) => {
                skipped_rows += 1;
                warn!(line, %error, "skipping malformed row");
            }
        }
    }
    progress.finish();

    Ok(RecordBatch {
        headers,
        records,
        skipped_rows,
    })
}

/// Lowercase header names, warning when two columns collapse to the
/// same key (the later column overwrites the earlier one per record).
fn lowercase_headers(record: &StringRecord) -> Vec<String> {
    let headers: Vec<String> = record.iter().map(str::to_lowercase).collect();
    let mut seen = BTreeSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            warn!(
                header = header.as_str(),
                "duplicate header after lowercasing; later column overwrites earlier values"
            );
        }
    }
    headers
}
