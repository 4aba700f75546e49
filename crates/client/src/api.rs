use async_trait::async_trait;
use notehub_core::{NotesResult, Tag};

use crate::error::ClientError;

/// Source of paginated note listings.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// Fetch one page of notes, optionally narrowed by a search term and a tag.
    async fn fetch_notes(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        tag: Option<Tag>,
    ) -> Result<NotesResult, ClientError>;
}
