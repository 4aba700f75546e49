//! Service layer for NoteHub
//!
//! Resolves filter page requests into metadata and a prefetched, dehydrated
//! query cache that the HTTP layer renders.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod filter_page_service;
mod query_cache;

pub use error::ServiceError;
pub use filter_page_service::{FilterPage, FilterPageService};
pub use query_cache::{DehydratedQuery, DehydratedState, QueryCache, QueryState, QueryStatus};
