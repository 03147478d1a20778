//! Domain model for the export pipeline.
//!
//! # Responsibility
//! - Define the wire-level shapes read from a Standard Notes backup.
//! - Define the derived `Note` record consumed by the writer.
//!
//! # Invariants
//! - Raw shapes stay permissive (optional fields); required-ness is
//!   enforced by the extractor, not the deserializer.
//! - A `Note` is only mutated by the tag linker, and only by appending
//!   to `tags`.

pub mod note;
pub mod raw;
