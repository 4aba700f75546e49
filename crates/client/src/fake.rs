//! In-memory [`NotesApi`] that records every call, for tests of callers.

use std::sync::Mutex;

use async_trait::async_trait;
use notehub_core::{NotesResult, Tag};

use crate::{ClientError, NotesApi};

/// Arguments of one recorded `fetch_notes` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub tag: Option<Tag>,
}

#[derive(Debug)]
enum Reply {
    Notes(NotesResult),
    Status(u16),
}

#[derive(Debug)]
pub struct RecordingNotesApi {
    reply: Reply,
    calls: Mutex<Vec<FetchCall>>,
}

impl RecordingNotesApi {
    /// Answers every call with `result`.
    #[must_use]
    pub fn returning(result: NotesResult) -> Self {
        Self { reply: Reply::Notes(result), calls: Mutex::new(Vec::new()) }
    }

    /// Fails every call with an upstream HTTP status.
    #[must_use]
    pub fn failing(code: u16) -> Self {
        Self { reply: Reply::Status(code), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NotesApi for RecordingNotesApi {
    async fn fetch_notes(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        tag: Option<Tag>,
    ) -> Result<NotesResult, ClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(FetchCall { page, per_page, search: search.map(str::to_owned), tag });
        }
        match &self.reply {
            Reply::Notes(result) => Ok(result.clone()),
            Reply::Status(code) => {
                Err(ClientError::HttpStatus { code: *code, body: "upstream failure".to_owned() })
            },
        }
    }
}
