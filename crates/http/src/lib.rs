//! HTTP server for NoteHub filter pages.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(unused_results, reason = "Some results are intentionally ignored")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod response_types;
pub mod view;

use axum::{Json, Router, http::StatusCode, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use notehub_core::CATEGORIES;
use notehub_service::FilterPageService;

pub use response_types::{CategoriesResponse, ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Holds only immutable service handles; every request builds its own query
/// cache.
pub struct AppState {
    /// Metadata resolver and page renderer for the filter route
    pub page_service: Arc<FilterPageService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/api/categories", get(categories))
        .route("/notes/filter", get(handlers::filter::filter_index))
        .route("/notes/filter/", get(handlers::filter::filter_index))
        .route("/notes/filter/{*slug}", get(handlers::filter::filter_page))
        .route("/api/notes/filter", get(handlers::filter::filter_index_json))
        .route("/api/notes/filter/", get(handlers::filter::filter_index_json))
        .route("/api/notes/filter/{*slug}", get(handlers::filter::filter_page_json))
        .route("/api/metadata/notes/filter", get(handlers::filter::filter_metadata_index))
        .route("/api/metadata/notes/filter/", get(handlers::filter::filter_metadata_index))
        .route("/api/metadata/notes/filter/{*slug}", get(handlers::filter::filter_metadata))
        .fallback(handlers::filter::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness() -> (StatusCode, Json<ReadinessResponse>) {
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse { categories: CATEGORIES.to_vec() })
}
