//! Loader stage: read and parse the backup file.

use std::fs;
use std::path::Path;

use crate::export::{ExportError, ExportResult};
use crate::model::raw::Export;

/// Reads the backup at `path` and parses it into an [`Export`].
///
/// # Errors
/// - `InputNotFound` when `path` is not an existing file.
/// - `Io` when the file cannot be read.
/// - `Parse` when the contents are not a well-formed backup document.
pub fn load_export(path: &Path) -> ExportResult<Export> {
    if !path.is_file() {
        return Err(ExportError::InputNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let export: Export = serde_json::from_str(&raw)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::load_export;
    use crate::export::ExportError;
    use std::io::Write;

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_export(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ExportError::InputNotFound(_)));
    }

    #[test]
    fn directory_path_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_export(dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::InputNotFound(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = load_export(file.path()).unwrap_err();
        assert!(matches!(err, ExportError::Parse(_)));
    }

    #[test]
    fn document_without_items_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"version": "004"}"#).unwrap();
        let err = load_export(file.path()).unwrap_err();
        assert!(matches!(err, ExportError::Parse(_)));
    }

    #[test]
    fn valid_document_loads_all_items() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let doc = serde_json::json!({
            "items": [
                {"content_type": "Note", "uuid": "n-1"},
                {"content_type": "SN|ItemsKey", "uuid": "k-1"}
            ]
        });
        file.write_all(doc.to_string().as_bytes()).unwrap();

        let export = load_export(file.path()).unwrap();
        assert_eq!(export.items.len(), 2);
        assert_eq!(export.items[0].uuid, "n-1");
    }
}
