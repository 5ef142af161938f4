//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a delimited table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("could not open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure while scanning the input.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input ended before a header row was found.
    #[error("could not read headers: {path} is empty")]
    EmptyInput { path: PathBuf },

    /// CSV-level parse failure on the header row.
    #[error("could not parse header row in {path}: {source}")]
    HeaderParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyInput {
            path: PathBuf::from("/data/input.csv"),
        };
        assert_eq!(
            err.to_string(),
            "could not read headers: /data/input.csv is empty"
        );
    }
}
