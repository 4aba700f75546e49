//! Client for the NoteHub notes API.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod api;
mod client;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fake;

pub use api::NotesApi;
pub use client::{NoteHubClient, truncate};
pub use error::ClientError;

#[cfg(test)]
mod client_tests;
