//! Watcher configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Historical epoch the first query window opens from
pub const DEFAULT_START_TIMESTAMP: i64 = 1_549_962_000;

/// Configuration for the StatusWatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Polling interval in seconds
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Unix timestamp the first query window opens from
    #[serde(default = "default_start_timestamp")]
    pub start_timestamp: i64,
}

fn default_poll_interval_secs() -> u64 {
    600
}

fn default_start_timestamp() -> i64 {
    DEFAULT_START_TIMESTAMP
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            start_timestamp: default_start_timestamp(),
        }
    }
}

impl WatcherConfig {
    /// Get the poll interval as a Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
