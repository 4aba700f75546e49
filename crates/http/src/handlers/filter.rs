use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use notehub_core::PageMetadata;
use notehub_service::{FilterPage, ServiceError};

use crate::AppState;
use crate::api_error::ApiError;
use crate::view;

/// Split the wildcard part of `/notes/filter/{*slug}` into segments.
fn split_slug(path: &str) -> Vec<String> {
    path.split('/').map(str::to_owned).collect()
}

/// Segments of an extracted slug. A slug that does not percent-decode to UTF-8
/// names no category, so it yields no segments.
fn slug_segments(path: Result<Path<String>, PathRejection>) -> Vec<String> {
    match path {
        Ok(Path(slug)) => split_slug(&slug),
        Err(rejection) => {
            tracing::debug!(%rejection, "undecodable filter slug");
            Vec::new()
        },
    }
}

pub async fn filter_page(
    State(state): State<Arc<AppState>>,
    slug: Result<Path<String>, PathRejection>,
) -> Response {
    render_html(&state, &slug_segments(slug)).await
}

/// `/notes/filter` with no slug at all.
pub async fn filter_index(State(state): State<Arc<AppState>>) -> Response {
    render_html(&state, &[]).await
}

pub async fn filter_page_json(
    State(state): State<Arc<AppState>>,
    slug: Result<Path<String>, PathRejection>,
) -> Result<Json<FilterPage>, ApiError> {
    let page = state.page_service.render(&slug_segments(slug)).await?;
    Ok(Json(page))
}

pub async fn filter_index_json(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FilterPage>, ApiError> {
    let page = state.page_service.render::<String>(&[]).await?;
    Ok(Json(page))
}

pub async fn filter_metadata(
    State(state): State<Arc<AppState>>,
    slug: Result<Path<String>, PathRejection>,
) -> Json<PageMetadata> {
    Json(state.page_service.metadata(&slug_segments(slug)))
}

pub async fn filter_metadata_index(State(state): State<Arc<AppState>>) -> Json<PageMetadata> {
    Json(state.page_service.metadata::<String>(&[]))
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(view::render_not_found(&PageMetadata::not_found())))
        .into_response()
}

async fn render_html(state: &AppState, slug: &[String]) -> Response {
    let result = state.page_service.render(slug).await;
    let page = match result {
        Ok(page) => page,
        Err(ServiceError::NotFound(msg)) => {
            tracing::debug!(%msg, "filter page not found");
            let metadata = state.page_service.metadata(slug);
            return (StatusCode::NOT_FOUND, Html(view::render_not_found(&metadata)))
                .into_response();
        },
        Err(e) => return internal_error(&e),
    };

    match view::render_filter_page(&page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error(&e),
    }
}

fn internal_error(err: &ServiceError) -> Response {
    tracing::error!(error = ?err, "filter page render failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(view::render_error())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_slug() {
        assert_eq!(split_slug("Work"), vec!["Work"]);
        assert_eq!(split_slug("Work/extra"), vec!["Work", "extra"]);
        assert_eq!(split_slug(""), vec![""]);
    }
}
