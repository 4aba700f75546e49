//! SEO metadata of the filter page.

use serde::{Deserialize, Serialize};

use crate::{APP_NAME, Category, FILTER_ROUTE_PREFIX, OG_IMAGE_URL};

/// Document title, description and social preview of a rendered page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub url: String,
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenGraphImage {
    pub url: String,
}

impl PageMetadata {
    /// Title-only metadata for slugs that match no category.
    #[must_use]
    pub fn not_found() -> Self {
        Self { title: format!("{APP_NAME} - Not Found"), description: None, open_graph: None }
    }

    /// Metadata for a resolved category. `site_url` is the public origin used
    /// for the canonical URL.
    #[must_use]
    pub fn for_category(category: Category, site_url: &str) -> Self {
        let title = format!("{APP_NAME} - {category}");
        let site_url = site_url.trim_end_matches('/');
        Self {
            description: Some(format!("Browse notes filtered by category: {category}.")),
            open_graph: Some(OpenGraph {
                title: title.clone(),
                url: format!("{site_url}{FILTER_ROUTE_PREFIX}/{category}"),
                images: vec![OpenGraphImage { url: OG_IMAGE_URL.to_owned() }],
            }),
            title,
        }
    }
}
