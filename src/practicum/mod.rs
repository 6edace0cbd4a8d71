//! Practicum homework status API module
//!
//! Fetching, envelope validation, and status interpretation for the
//! homework review API. The client returns the body untyped; validation and
//! interpretation turn it into a user-facing sentence or a classified error.

mod api;
pub mod client;
mod error;
mod response;
mod types;

pub use api::{DEFAULT_ENDPOINT, PracticumClient};
pub use client::StatusClient;
pub use error::PracticumError;
pub use response::{status_message, validate_response};
pub use types::HomeworkStatus;
