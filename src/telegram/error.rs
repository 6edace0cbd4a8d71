//! Telegram delivery error types

use thiserror::Error;

/// Errors that can occur while delivering a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram API returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Telegram rejected the message: {description}")]
    Rejected { description: String },
}
