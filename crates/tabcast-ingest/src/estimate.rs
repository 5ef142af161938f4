//! Line-count based estimation of the data-row total.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Estimate the number of data rows in a delimited file.
///
/// Counts newline-delimited lines and subtracts one for the header,
/// clamping to zero for empty input. The estimate is advisory: a quoted
/// field spanning multiple lines counts as several lines here but one
/// record to the parser, so the value must only be used to size a
/// progress indicator and never for correctness.
pub fn estimate_data_rows(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut lines = 0u64;
    for line in reader.lines() {
        line.map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        lines += 1;
    }
    let estimate = lines.saturating_sub(1);
    debug!(path = %path.display(), lines, estimate, "estimated data rows");
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn test_estimate_counts_data_lines() {
        let file = fixture("name,age\nAlice,30\nBob,25\n");
        assert_eq!(estimate_data_rows(file.path()).unwrap(), 2);
    }

    #[test]
    fn test_estimate_header_only() {
        let file = fixture("name,age\n");
        assert_eq!(estimate_data_rows(file.path()).unwrap(), 0);
    }

    #[test]
    fn test_estimate_empty_file_clamps_to_zero() {
        let file = fixture("");
        assert_eq!(estimate_data_rows(file.path()).unwrap(), 0);
    }

    #[test]
    fn test_estimate_missing_file() {
        let err = estimate_data_rows(Path::new("/nonexistent/input.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileOpen { .. }));
    }

    #[test]
    fn test_estimate_overcounts_multiline_quoted_fields() {
        // Two physical lines for one record; the estimate measures lines.
        let file = fixture("name,note\nAlice,\"line one\nline two\"\n");
        assert_eq!(estimate_data_rows(file.path()).unwrap(), 2);
    }
}
