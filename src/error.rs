//! Error type shared by catalog ingestion and search configuration.
//!
//! The search itself is total: once a [`SearchConfig`](crate::search::SearchConfig)
//! validates, every catalog and constraint set produces a (possibly empty)
//! result. Errors only come from the edges.

use thiserror::Error;

/// Errors raised while loading inputs or validating configuration.
#[derive(Debug, Error)]
pub enum BlendError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("catalog input is empty")]
    EmptyCatalog,

    #[error("catalog header row is missing a name column")]
    MissingHeader,

    #[error("line {line}, column {column}: '{value}' is not a non-negative integer")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
