//! Request-scoped cache of notes queries.
//!
//! A fresh [`QueryCache`] is built for every page request, filled by
//! [`QueryCache::prefetch`], and handed to the client view as a
//! [`DehydratedState`]. The client rebuilds the cache with
//! [`QueryCache::hydrate`] so its first render needs no network round-trip.

use std::collections::BTreeMap;
use std::future::Future;

use chrono::Utc;
use notehub_core::{NoteQueryKey, NotesResult};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
}

/// Cached result of one query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub data: NotesResult,
    /// Milliseconds since the Unix epoch.
    pub data_updated_at: i64,
    pub status: QueryStatus,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: BTreeMap<NoteQueryKey, QueryState>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fetch` and store its result under `key`.
    ///
    /// Keys that already hold data are left untouched and `fetch` is not
    /// called. A failed fetch stores nothing and returns the error.
    pub async fn prefetch<F, Fut, E>(&mut self, key: NoteQueryKey, fetch: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<NotesResult, E>>,
    {
        if self.entries.contains_key(&key) {
            tracing::debug!(?key, "query already cached, skipping prefetch");
            return Ok(());
        }
        let data = fetch().await?;
        tracing::debug!(?key, notes = data.notes.len(), "prefetched notes");
        self.entries.insert(
            key,
            QueryState {
                data,
                data_updated_at: Utc::now().timestamp_millis(),
                status: QueryStatus::Success,
            },
        );
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: &NoteQueryKey) -> Option<&QueryState> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot every cached query for transfer to the client view.
    #[must_use]
    pub fn dehydrate(&self) -> DehydratedState {
        DehydratedState {
            queries: self
                .entries
                .iter()
                .map(|(key, state)| DehydratedQuery { query_key: key.clone(), state: state.clone() })
                .collect(),
        }
    }

    /// Rebuild a cache from a snapshot. Later duplicates of a key win.
    #[must_use]
    pub fn hydrate(state: DehydratedState) -> Self {
        Self {
            entries: state.queries.into_iter().map(|q| (q.query_key, q.state)).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedState {
    pub queries: Vec<DehydratedQuery>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedQuery {
    pub query_key: NoteQueryKey,
    pub state: QueryState,
}

impl DehydratedState {
    pub fn to_json(&self) -> Result<String, ServiceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        Ok(serde_json::from_str(json)?)
    }
}
