//! Homework API error types

use thiserror::Error;

/// Errors that can occur while fetching or reading homework statuses
#[derive(Debug, Error)]
pub enum PracticumError {
    #[error("request to the homework API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("homework API returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("homework API returned an empty response")]
    EmptyResponse,

    #[error("unexpected {found} in homework API response, expected {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("homework API response has no `{0}` key")]
    MissingKey(&'static str),

    #[error("homework record has no name")]
    MissingName,

    #[error("undocumented homework status: {0}")]
    UnknownStatus(String),

    #[error("homework record has no `status` key")]
    MissingStatus,
}

impl PracticumError {
    /// Check if this error is a transport-level fault that may clear on its own
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PracticumError::Request(_) | PracticumError::HttpStatus { .. }
        )
    }
}
