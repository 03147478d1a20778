//! Writer stage: render notes and persist them as markdown files.
//!
//! # Responsibility
//! - Derive a filesystem-safe filename per note, with one-level
//!   collision disambiguation.
//! - Render YAML front matter followed by the raw body.
//! - Stamp each file's access/modified times with the note's
//!   last-updated time.
//!
//! # Invariants
//! - File times use `updated_at_timestamp.div_euclid(1_000_000)`; the
//!   floor division by one million is a numeric contract, not a mere
//!   unit conversion.
//! - Nothing outside the export directory is touched.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use log::debug;

use crate::export::ExportResult;
use crate::model::note::Note;

/// Characters stripped from titles before use as filenames.
const FORBIDDEN_FILENAME_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Removes filesystem-hostile characters from a note title.
///
/// Strips exactly `\ / * ? : " < > |` and nothing else.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect()
}

/// Renders a note as YAML front matter followed by the raw body.
///
/// The `tags:` block only appears when the note has tags. Lines are
/// joined with `\n` and no trailing newline is appended.
pub fn render_note(note: &Note) -> String {
    let mut lines = vec!["---".to_string(), format!("title: {}", note.title)];
    if !note.tags.is_empty() {
        let tags = note
            .tags
            .iter()
            .map(|tag| format!("  - {tag}"))
            .collect::<Vec<_>>()
            .join("\n");
        lines.push(format!("tags:\n{tags}"));
    }
    lines.push("---".to_string());
    lines.push(note.text.clone());
    lines.join("\n")
}

/// Creates the export directory and writes one file per note.
///
/// # Errors
/// - `Io` on any directory or file operation failure.
pub fn write_notes(notes: &[Note], export_dir: &Path) -> ExportResult<()> {
    // The caller already guaranteed the directory does not pre-exist.
    fs::create_dir_all(export_dir)?;

    for note in notes {
        let path = note_path(export_dir, note);
        fs::write(&path, render_note(note))?;

        let seconds = note.updated_at_timestamp.div_euclid(MICROS_PER_SECOND);
        let stamp = FileTime::from_unix_time(seconds, 0);
        filetime::set_file_times(&path, stamp, stamp)?;

        debug!(
            "event=note_written module=export uuid={} path={}",
            note.uuid,
            path.display()
        );
    }
    Ok(())
}

/// Picks the output path for a note, disambiguating one collision.
///
/// The fallback appends the first `-`-separated segment of the uuid.
/// A second collision on the fallback name is left unhandled and will
/// overwrite; see DESIGN.md.
fn note_path(export_dir: &Path, note: &Note) -> PathBuf {
    let base = sanitize_title(&note.title);
    let path = export_dir.join(format!("{base}.md"));
    if !path.exists() {
        return path;
    }

    let id_fragment = note.uuid.split('-').next().unwrap_or_default();
    export_dir.join(format!("{base}-{id_fragment}.md"))
}
