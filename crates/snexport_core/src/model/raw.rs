//! Wire-level shapes of a Standard Notes JSON backup.
//!
//! All content fields are optional here on purpose: the backup mixes
//! several item kinds under one `items` list, and which fields a record
//! must carry depends on its `content_type`. The extractor owns those
//! checks and reports a precise `MissingField` error instead of a
//! generic deserialization failure.

use serde::Deserialize;

/// Discriminator value for note items.
pub const CONTENT_TYPE_NOTE: &str = "Note";
/// Discriminator value for tag items.
pub const CONTENT_TYPE_TAG: &str = "Tag";

/// Top-level backup document.
#[derive(Debug, Clone, Deserialize)]
pub struct Export {
    /// All exported items, notes and tags interleaved with other kinds.
    pub items: Vec<RawItem>,
}

/// One item from the backup's `items` list, prior to interpretation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    /// Kind discriminator (`Note`, `Tag`, or an ignored kind).
    pub content_type: String,
    /// Stable identifier assigned by Standard Notes.
    pub uuid: String,
    /// Kind-specific payload. Absent on some bookkeeping item kinds.
    #[serde(default)]
    pub content: Option<ItemContent>,
    /// Last modification time in epoch microseconds.
    #[serde(default)]
    pub updated_at_timestamp: Option<i64>,
    /// Set when this item duplicates another item.
    #[serde(default)]
    pub duplicate_of: Option<String>,
}

impl RawItem {
    /// Returns whether this item is a note record.
    pub fn is_note(&self) -> bool {
        self.content_type == CONTENT_TYPE_NOTE
    }

    /// Returns whether this item is a tag record.
    pub fn is_tag(&self) -> bool {
        self.content_type == CONTENT_TYPE_TAG
    }
}

/// Kind-dependent item payload. Note and tag fields share one shape
/// because every field is optional at the wire level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemContent {
    pub title: Option<String>,
    pub text: Option<String>,
    pub trashed: Option<bool>,
    #[serde(rename = "appData")]
    pub app_data: Option<AppData>,
    pub references: Vec<Reference>,
}

/// One entry of a tag's `references` list.
///
/// Both fields are optional at the wire level; the linker treats a
/// reference as valid only when it targets the `Note` kind and carries
/// a non-empty uuid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
}

/// Per-application metadata bag nested in note content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppData {
    /// Standard Notes' own metadata domain. Expected on every note.
    #[serde(rename = "org.standardnotes.sn", default)]
    pub standard_notes: Option<SnAppData>,
}

/// Fields under the `org.standardnotes.sn` metadata domain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnAppData {
    #[serde(default)]
    pub archived: bool,
}

#[cfg(test)]
mod tests {
    use super::{Export, CONTENT_TYPE_NOTE, CONTENT_TYPE_TAG};

    #[test]
    fn deserializes_note_item_with_nested_archived_flag() {
        let export: Export = serde_json::from_value(serde_json::json!({
            "items": [{
                "content_type": "Note",
                "uuid": "aaaa-bbbb",
                "updated_at_timestamp": 1_700_000_000_000_000_i64,
                "content": {
                    "title": "hello",
                    "text": "world",
                    "trashed": false,
                    "appData": {"org.standardnotes.sn": {"archived": true}}
                }
            }]
        }))
        .unwrap();

        let item = &export.items[0];
        assert_eq!(item.content_type, CONTENT_TYPE_NOTE);
        assert!(item.is_note());
        let content = item.content.as_ref().unwrap();
        let sn = content
            .app_data
            .as_ref()
            .unwrap()
            .standard_notes
            .as_ref()
            .unwrap();
        assert!(sn.archived);
    }

    #[test]
    fn deserializes_tag_references_including_partial_ones() {
        let export: Export = serde_json::from_value(serde_json::json!({
            "items": [{
                "content_type": "Tag",
                "uuid": "tag-1",
                "content": {
                    "title": "work",
                    "references": [
                        {"content_type": "Note", "uuid": "n-1"},
                        {"uuid": "n-2"},
                        {"content_type": "Note"}
                    ]
                }
            }]
        }))
        .unwrap();

        let references = &export.items[0].content.as_ref().unwrap().references;
        assert_eq!(references.len(), 3);
        assert_eq!(references[0].content_type.as_deref(), Some("Note"));
        assert_eq!(references[0].uuid.as_deref(), Some("n-1"));
        assert_eq!(references[1].content_type, None);
        assert_eq!(references[2].uuid, None);
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let export: Export = serde_json::from_value(serde_json::json!({
            "items": [{
                "content_type": "Tag",
                "uuid": "tag-1",
                "content": {"title": "work", "references": []}
            }]
        }))
        .unwrap();

        let item = &export.items[0];
        assert_eq!(item.content_type, CONTENT_TYPE_TAG);
        assert!(item.is_tag());
        assert_eq!(item.updated_at_timestamp, None);
        assert_eq!(item.duplicate_of, None);
        let content = item.content.as_ref().unwrap();
        assert!(content.references.is_empty());
        assert!(content.app_data.is_none());
    }
}
