//! Core types and traits for NoteHub
//!
//! This crate contains domain types shared across all other crates.

mod category;
pub mod constants;
mod env_config;
mod error;
mod metadata;
mod note;
mod query_key;

pub use category::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use metadata::*;
pub use note::*;
pub use query_key::*;
