//! Tag linker stage: attach tag titles to extracted notes.
//!
//! # Responsibility
//! - Walk tag records in input order and resolve their note references.
//! - Append tag titles to matching notes; ignore everything else.
//!
//! # Invariants
//! - A note's `tags` order equals the input order of the tag records
//!   that reference it.
//! - References to filtered-out or unknown notes are dropped silently.

use log::debug;

use crate::export::{ExportError, ExportResult};
use crate::model::note::Note;
use crate::model::raw::{RawItem, Reference, CONTENT_TYPE_NOTE};

/// Links every `"Tag"` item's valid references to the extracted notes.
///
/// A reference is valid only when it targets the `"Note"` kind and
/// carries a non-empty uuid. Lookup is a linear scan; backup sizes make
/// anything fancier pointless.
///
/// # Errors
/// - `MissingField` when a tag record resolves a reference to a note
///   but carries no `title` to attach.
pub fn link_tags(items: &[RawItem], notes: &mut [Note]) -> ExportResult<()> {
    for item in items.iter().filter(|item| item.is_tag()) {
        let Some(content) = item.content.as_ref() else {
            continue;
        };

        for reference in content.references.iter().filter(|r| is_valid(r)) {
            let Some(uuid) = reference.uuid.as_deref() else {
                continue;
            };
            let Some(note) = notes.iter_mut().find(|note| note.uuid == uuid) else {
                debug!(
                    "event=tag_ref_skipped module=export tag={} target={uuid}",
                    item.uuid
                );
                continue;
            };

            let title = content
                .title
                .as_ref()
                .ok_or_else(|| ExportError::MissingField {
                    uuid: item.uuid.clone(),
                    field: "content.title",
                })?;
            note.tags.push(title.clone());
        }
    }
    Ok(())
}

fn is_valid(reference: &Reference) -> bool {
    reference.content_type.as_deref() == Some(CONTENT_TYPE_NOTE)
        && reference.uuid.as_deref().is_some_and(|uuid| !uuid.is_empty())
}
