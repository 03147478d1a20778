//! Extractor stage: turn raw note items into retained [`Note`]s.
//!
//! # Responsibility
//! - Order items by kind so notes are materialized before tags.
//! - Enforce which raw fields a well-formed note record must carry.
//! - Drop trashed/archived/duplicated notes immediately.
//!
//! # Invariants
//! - Sorting is stable: relative input order within a kind is kept,
//!   which is what makes tag order on notes deterministic later.
//! - A returned `Note` always satisfies `is_retained()`.

use crate::export::{ExportError, ExportResult};
use crate::model::note::Note;
use crate::model::raw::RawItem;

/// Stable-sorts items by their kind discriminator.
///
/// `"Note"` sorts before `"Tag"`, so after this the linker can assume
/// every note is already extracted when it walks the tag records.
pub fn sort_items_by_kind(items: &mut [RawItem]) {
    items.sort_by(|a, b| a.content_type.cmp(&b.content_type));
}

/// Builds retained notes from all `"Note"` items, in item order.
///
/// # Errors
/// - `MissingField` when a note record lacks `content`, `title`,
///   `text`, `updated_at_timestamp`, or the `appData` path that carries
///   the archived flag.
pub fn extract_notes(items: &[RawItem]) -> ExportResult<Vec<Note>> {
    let mut notes = Vec::new();
    for item in items.iter().filter(|item| item.is_note()) {
        let note = note_from_item(item)?;
        if note.is_retained() {
            notes.push(note);
        }
    }
    Ok(notes)
}

fn note_from_item(item: &RawItem) -> ExportResult<Note> {
    let content = item
        .content
        .as_ref()
        .ok_or_else(|| missing(item, "content"))?;
    let title = content
        .title
        .clone()
        .ok_or_else(|| missing(item, "content.title"))?;
    let text = content
        .text
        .clone()
        .ok_or_else(|| missing(item, "content.text"))?;
    let updated_at_timestamp = item
        .updated_at_timestamp
        .ok_or_else(|| missing(item, "updated_at_timestamp"))?;

    // The appData path is always present in well-formed backups, so its
    // absence is fatal; only the leaf `archived` flag defaults to false.
    let app_data = content
        .app_data
        .as_ref()
        .ok_or_else(|| missing(item, "content.appData"))?;
    let archived = app_data
        .standard_notes
        .as_ref()
        .ok_or_else(|| missing(item, "content.appData[org.standardnotes.sn]"))?
        .archived;

    Ok(Note {
        uuid: item.uuid.clone(),
        title,
        text,
        updated_at_timestamp,
        duplicate_of: item.duplicate_of.clone(),
        trashed: content.trashed.unwrap_or(false),
        archived,
        tags: Vec::new(),
    })
}

fn missing(item: &RawItem, field: &'static str) -> ExportError {
    ExportError::MissingField {
        uuid: item.uuid.clone(),
        field,
    }
}
