//! Indented JSON document writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{OutputError, Result};

/// Serialize `value` as a pretty-printed JSON document at `path`.
///
/// The file is created (truncating any existing document) before
/// serialization starts, so a failure mid-write leaves a partial file
/// behind; callers that need atomic replacement must stage elsewhere.
pub fn write_json_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| OutputError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote JSON document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn test_writes_indented_array_of_objects() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("records.json");
        let mut record = BTreeMap::new();
        record.insert("name".to_string(), "Alice".to_string());
        record.insert("age".to_string(), "30".to_string());

        write_json_document(&path, &vec![record]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[\n  {\n    \"age\": \"30\",\n    \"name\": \"Alice\"\n  }\n]"
        );
    }

    #[test]
    fn test_empty_sequence_writes_empty_array() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("empty.json");

        write_json_document(&path, &Vec::<BTreeMap<String, String>>::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_create_failure_is_reported() {
        let err = write_json_document(
            Path::new("/nonexistent/dir/records.json"),
            &Vec::<BTreeMap<String, String>>::new(),
        )
        .unwrap_err();
        assert!(matches!(err, OutputError::FileCreate { .. }));
    }
}
