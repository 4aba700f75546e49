use thiserror::Error;

/// Errors raised while parsing NoteHub domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid query key: {0}")]
    InvalidQueryKey(String),
}
