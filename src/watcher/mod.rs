//! Watcher module for homework status polling
//!
//! The StatusWatcher polls the homework API at a fixed interval and sends a
//! Telegram message exactly when the review status changes. Faults become
//! de-duplicated notifications; nothing short of startup failure stops it.

mod config;
mod status_watcher;

pub use config::{DEFAULT_START_TIMESTAMP, WatcherConfig};
pub use status_watcher::{CycleOutcome, StatusWatcher};
