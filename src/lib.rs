//! homeworkbot - Telegram notifier for homework review status changes
//!
//! Polls the Practicum homework API at a fixed interval and sends a Telegram
//! message exactly when the review status of the tracked homework changes.
//! Transient faults become de-duplicated notifications instead of crashes.
//!
//! # Core Concepts
//!
//! - **One actor, plain state**: the watcher owns the query window and both
//!   de-duplication registers as ordinary fields
//! - **Errors are values**: every cycle fault is a tagged variant caught once
//!   at the loop boundary, formatted only for the outgoing message
//! - **Delivery never kills the loop**: notifier failures are logged by a
//!   single guard and dropped
//! - **Cold start by design**: nothing is persisted; a restart re-polls from
//!   the configured epoch
//!
//! # Modules
//!
//! - [`practicum`] - Status API client, response validation, interpretation
//! - [`telegram`] - Notifier trait and Bot API implementation
//! - [`watcher`] - The poll loop
//! - [`config`] - Credential loading from the environment
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod practicum;
pub mod telegram;
pub mod watcher;

// Re-export commonly used types
pub use config::Credentials;
pub use practicum::{PracticumClient, PracticumError, StatusClient};
pub use telegram::{Notifier, NotifyError, TelegramNotifier};
pub use watcher::{CycleOutcome, StatusWatcher, WatcherConfig};
