use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Tag;

/// A note as returned by the NoteHub API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tag: Tag,
}

/// One page of notes plus the total page count for the applied filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotesResult {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_result_from_api_payload() {
        let body = serde_json::json!({
            "notes": [{
                "id": "65ca67e7ae7f10c88b598384",
                "title": "Standup",
                "content": "Sync with the team",
                "createdAt": "2025-07-01T10:00:00.000Z",
                "updatedAt": "2025-07-02T08:30:00.000Z",
                "tag": "Meeting"
            }],
            "totalPages": 3
        });

        let result: NotesResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].tag, Tag::Meeting);
        assert_eq!(result.notes[0].title, "Standup");
    }

    #[test]
    fn test_missing_content_defaults_to_empty() {
        let body = serde_json::json!({
            "id": "1",
            "title": "Groceries",
            "createdAt": "2025-07-01T10:00:00Z",
            "updatedAt": "2025-07-01T10:00:00Z",
            "tag": "Shopping"
        });
        let note: Note = serde_json::from_value(body).unwrap();
        assert!(note.content.is_empty());
    }
}
