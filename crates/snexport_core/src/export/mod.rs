//! Export pipeline: load, extract, link, write.
//!
//! # Responsibility
//! - Orchestrate the four stages in strict forward order.
//! - Own the pipeline-wide error type.
//!
//! # Invariants
//! - The destination directory must not exist before any write happens.
//! - Stages run single-threaded; notes are mutated only by the linker.
//! - Every error is fatal; files already written are left in place.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use log::info;

mod extract;
mod link;
mod load;
mod write;

pub use extract::{extract_notes, sort_items_by_kind};
pub use link::link_tags;
pub use load::load_export;
pub use write::{render_note, sanitize_title, write_notes};

pub type ExportResult<T> = Result<T, ExportError>;

/// Fatal pipeline error. Nothing is retried or recovered.
#[derive(Debug)]
pub enum ExportError {
    /// The input path does not reference an existing file.
    InputNotFound(PathBuf),
    /// The destination directory already exists; refuse to touch it.
    DestinationExists(PathBuf),
    /// The input is not a well-formed backup document.
    Parse(serde_json::Error),
    /// A record lacks a field well-formed backups always carry.
    MissingField {
        uuid: String,
        field: &'static str,
    },
    /// Filesystem failure while reading input or writing output.
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputNotFound(path) => {
                write!(f, "input file not found: {}", path.display())
            }
            Self::DestinationExists(path) => write!(
                f,
                "destination `{}` already exists; refusing to overwrite anything",
                path.display()
            ),
            Self::Parse(err) => write!(f, "invalid backup document: {err}"),
            Self::MissingField { uuid, field } => {
                write!(f, "item `{uuid}` is missing required field `{field}`")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Runs the full pipeline and returns the exported note count.
///
/// # Errors
/// - `DestinationExists` when `export_dir` already exists, checked
///   before anything is read or written.
/// - Any stage error, propagated unchanged.
pub fn run(input_path: &Path, export_dir: &Path) -> ExportResult<usize> {
    if export_dir.exists() {
        return Err(ExportError::DestinationExists(export_dir.to_path_buf()));
    }

    info!(
        "event=export_start module=export input={} dest={}",
        input_path.display(),
        export_dir.display()
    );

    let mut export = load_export(input_path)?;
    info!(
        "event=items_loaded module=export status=ok count={}",
        export.items.len()
    );

    sort_items_by_kind(&mut export.items);
    let mut notes = extract_notes(&export.items)?;
    link_tags(&export.items, &mut notes)?;
    info!(
        "event=notes_extracted module=export status=ok count={}",
        notes.len()
    );

    write_notes(&notes, export_dir)?;
    info!(
        "event=export_complete module=export status=ok count={}",
        notes.len()
    );

    Ok(notes.len())
}

#[cfg(test)]
mod tests {
    use super::{run, ExportError};
    use std::path::Path;

    #[test]
    fn run_rejects_existing_destination_before_reading_input() {
        let dest = tempfile::tempdir().unwrap();

        // The input path is deliberately bogus: the destination guard
        // must fire first.
        let err = run(Path::new("/nonexistent/backup.json"), dest.path()).unwrap_err();
        assert!(matches!(err, ExportError::DestinationExists(_)));
    }

    #[test]
    fn run_reports_missing_input() {
        let dest = tempfile::tempdir().unwrap();
        let missing_dest = dest.path().join("out");

        let err = run(Path::new("/nonexistent/backup.json"), &missing_dest).unwrap_err();
        assert!(matches!(err, ExportError::InputNotFound(_)));
    }
}
