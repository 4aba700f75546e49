use std::sync::Arc;

use notehub_client::NotesApi;
use notehub_core::{Category, FIRST_PAGE, NoteQueryKey, PER_PAGE, PageMetadata, Tag};
use serde::{Deserialize, Serialize};

use crate::query_cache::{DehydratedState, QueryCache};
use crate::ServiceError;

/// Everything the view needs to render one filter page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterPage {
    pub category: Category,
    pub metadata: PageMetadata,
    /// Filter handed to the client view; `None` for [`Category::All`].
    pub tag: Option<Tag>,
    pub dehydrated_state: DehydratedState,
}

pub struct FilterPageService {
    api: Arc<dyn NotesApi>,
    site_url: String,
}

impl FilterPageService {
    #[must_use]
    pub fn new(api: Arc<dyn NotesApi>, site_url: impl Into<String>) -> Self {
        Self { api, site_url: site_url.into() }
    }

    /// Page metadata for a slug. Unknown or missing categories degrade to the
    /// not-found title instead of failing.
    #[must_use]
    pub fn metadata<S: AsRef<str>>(&self, slug: &[S]) -> PageMetadata {
        match resolve_slug(slug) {
            Some(category) => PageMetadata::for_category(category, &self.site_url),
            None => PageMetadata::not_found(),
        }
    }

    /// Resolve the slug, prefetch the first page of matching notes and
    /// dehydrate the request cache.
    ///
    /// Unknown categories fail with [`ServiceError::NotFound`] before any
    /// fetch. Fetch failures propagate unchanged.
    pub async fn render<S: AsRef<str> + Sync>(
        &self,
        slug: &[S],
    ) -> Result<FilterPage, ServiceError> {
        let category = resolve_slug(slug).ok_or_else(|| {
            ServiceError::NotFound(format!(
                "category '{}'",
                slug.first().map(AsRef::as_ref).unwrap_or_default()
            ))
        })?;
        let tag = category.filter();
        tracing::info!(%category, "rendering filter page");

        let mut cache = QueryCache::new();
        cache
            .prefetch(NoteQueryKey::first_page(tag), || {
                self.api.fetch_notes(FIRST_PAGE, PER_PAGE, None, tag)
            })
            .await?;

        Ok(FilterPage {
            category,
            metadata: PageMetadata::for_category(category, &self.site_url),
            tag,
            dehydrated_state: cache.dehydrate(),
        })
    }
}

fn resolve_slug<S: AsRef<str>>(slug: &[S]) -> Option<Category> {
    Category::resolve(slug.first().map(AsRef::as_ref))
}
