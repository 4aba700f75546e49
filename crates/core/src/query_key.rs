//! Composite cache key of a notes list query.
//!
//! Serialized as `["notes", {"page", "perPage", "search", "tag"}]` so the client
//! view addresses hydrated entries with the same key it builds itself.

use serde::{Deserialize, Serialize};

use crate::{CoreError, FIRST_PAGE, NOTES_QUERY_SCOPE, PER_PAGE, Tag};

/// Identity of one cached notes query.
///
/// Two keys with identical fields address the same cache entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "KeyRepr", try_from = "KeyRepr")]
pub struct NoteQueryKey {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub tag: Option<Tag>,
}

impl NoteQueryKey {
    #[must_use]
    pub fn new(page: u32, per_page: u32, search: impl Into<String>, tag: Option<Tag>) -> Self {
        Self { page, per_page, search: search.into(), tag }
    }

    /// Key of the first page the filter route prefetches.
    #[must_use]
    pub fn first_page(tag: Option<Tag>) -> Self {
        Self::new(FIRST_PAGE, PER_PAGE, "", tag)
    }

    /// Search term to send upstream; empty searches are omitted.
    #[must_use]
    pub fn search_param(&self) -> Option<&str> {
        (!self.search.is_empty()).then_some(self.search.as_str())
    }
}

#[derive(Serialize, Deserialize)]
struct KeyRepr(String, KeyParams);

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyParams {
    page: u32,
    per_page: u32,
    search: String,
    tag: Option<Tag>,
}

impl From<NoteQueryKey> for KeyRepr {
    fn from(key: NoteQueryKey) -> Self {
        Self(
            NOTES_QUERY_SCOPE.to_owned(),
            KeyParams { page: key.page, per_page: key.per_page, search: key.search, tag: key.tag },
        )
    }
}

impl TryFrom<KeyRepr> for NoteQueryKey {
    type Error = CoreError;

    fn try_from(KeyRepr(scope, params): KeyRepr) -> Result<Self, Self::Error> {
        if scope != NOTES_QUERY_SCOPE {
            return Err(CoreError::InvalidQueryKey(format!("unexpected scope '{scope}'")));
        }
        Ok(Self {
            page: params.page,
            per_page: params.per_page,
            search: params.search,
            tag: params.tag,
        })
    }
}
