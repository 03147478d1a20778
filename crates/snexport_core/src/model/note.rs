//! Derived note record.
//!
//! # Responsibility
//! - Hold the fields the writer needs, decoupled from wire shapes.
//! - Decide retention via a single pure predicate.
//!
//! # Invariants
//! - `uuid` is the backup's identifier, kept verbatim.
//! - `updated_at_timestamp` stays in epoch microseconds until the
//!   writer converts it for file times.
//! - `tags` is append-only and preserves tag-record input order.

/// A user-authored text entry eligible for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Stable identifier from the source system.
    pub uuid: String,
    /// Display name; drives the output filename, not guaranteed unique.
    pub title: String,
    /// Free-form body text.
    pub text: String,
    /// Last modification time in epoch microseconds.
    pub updated_at_timestamp: i64,
    /// Identifier of the note this one duplicates, when any.
    pub duplicate_of: Option<String>,
    pub trashed: bool,
    pub archived: bool,
    /// Tag titles appended by the linker, in input order.
    pub tags: Vec<String>,
}

impl Note {
    /// Returns whether this note belongs in the export output.
    ///
    /// Trashed, archived and duplicated notes are dropped.
    pub fn is_retained(&self) -> bool {
        !self.trashed && !self.archived && self.duplicate_of.is_none()
    }
}
