//! Error types for document output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file could not be created.
    #[error("could not create output file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record sequence could not be serialized as JSON.
    #[error("could not serialize JSON for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialized document could not be flushed to disk.
    #[error("could not write JSON data to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutputError::FileCreate {
            path: PathBuf::from("/out/records.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "could not create output file /out/records.json: denied"
        );
    }
}
