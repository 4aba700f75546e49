use async_trait::async_trait;
use notehub_core::{NoteHubConfig, NotesResult, Tag};

use crate::api::NotesApi;
use crate::error::ClientError;

/// Reqwest-backed client for `GET {base_url}/notes`.
pub struct NoteHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for NoteHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteHubClient")
            .field("client", &self.client)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl NoteHubClient {
    /// Creates a client for the given API base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, token, base_url })
    }

    /// Creates a client from runtime configuration.
    pub fn from_config(config: &NoteHubConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_url,
            config.token.clone(),
            std::time::Duration::from_secs(config.http_timeout_secs),
        )
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_query(
        page: u32,
        per_page: u32,
        search: Option<&str>,
        tag: Option<Tag>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.to_string()), ("perPage", per_page.to_string())];
        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_owned()));
        }
        if let Some(tag) = tag {
            params.push(("tag", tag.as_str().to_owned()));
        }
        params
    }
}

#[async_trait]
impl NotesApi for NoteHubClient {
    async fn fetch_notes(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        tag: Option<Tag>,
    ) -> Result<NotesResult, ClientError> {
        let mut request = self
            .client
            .get(format!("{}/notes", self.base_url))
            .query(&Self::notes_query(page, per_page, search, tag));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(page, per_page, ?tag, "fetching notes");
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, 500).to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::JsonParse {
            context: format!("notes response (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
