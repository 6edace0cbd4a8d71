//! Status watcher implementation

use std::sync::Arc;

use chrono::Utc;
use eyre::Result;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::config::WatcherConfig;
use crate::practicum::{PracticumError, StatusClient, status_message, validate_response};
use crate::telegram::Notifier;

/// What a single poll cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The tracked homework changed status; a notification was attempted
    Notified(String),
    /// Same status as last time; nothing sent
    Unchanged,
    /// No homework records in the window
    Idle,
    /// The cycle failed; `notified` is false when the fault text repeated
    Faulted { message: String, notified: bool },
}

/// The StatusWatcher polls the homework API and messages the user on change
///
/// Owns every piece of loop state: the query window and both de-duplication
/// registers. Nothing is shared and nothing is persisted; a restart is a
/// cold start from the configured epoch.
pub struct StatusWatcher {
    config: WatcherConfig,
    client: Arc<dyn StatusClient>,
    notifier: Arc<dyn Notifier>,
    from_date: i64,
    last_status: Option<String>,
    last_error: Option<String>,
}

impl StatusWatcher {
    /// Create a new StatusWatcher
    pub fn new(config: WatcherConfig, client: Arc<dyn StatusClient>, notifier: Arc<dyn Notifier>) -> Self {
        let from_date = config.start_timestamp;
        Self {
            config,
            client,
            notifier,
            from_date,
            last_status: None,
            last_error: None,
        }
    }

    /// Run the poll loop
    ///
    /// Runs until the task is dropped. Every cycle error is absorbed into a
    /// (de-duplicated) notification, and the sleep follows every cycle.
    pub async fn run(mut self) -> Result<()> {
        info!(
            interval_secs = self.config.poll_interval_secs,
            from_date = self.from_date,
            "StatusWatcher started"
        );

        loop {
            self.run_cycle().await;

            // Sleep until the next poll; reached on every path out of a cycle
            tokio::time::sleep(self.config.poll_interval()).await;
        }
    }

    /// Run a single guarded cycle without sleeping (single-shot mode, tests)
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.check_status().await {
            Ok(outcome) => outcome,
            Err(e) => self.report_failure(&e).await,
        }
    }

    /// One fetch, validate, interpret, compare pass; errors go to the caller
    async fn check_status(&mut self) -> Result<CycleOutcome, PracticumError> {
        let response = self.client.fetch(self.from_date).await?;
        let records = validate_response(&response)?;
        self.advance_window(&response);

        let Some(record) = records.first() else {
            debug!("No homework records in the window");
            return Ok(CycleOutcome::Idle);
        };

        let message = status_message(record)?;
        if self.last_status.as_deref() == Some(message.as_str()) {
            debug!("Homework status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        info!("Homework status changed");
        self.last_status = Some(message.clone());
        self.send_guarded(&message).await;
        Ok(CycleOutcome::Notified(message))
    }

    /// Format a cycle failure, de-duplicate, notify on first occurrence
    async fn report_failure(&mut self, err: &PracticumError) -> CycleOutcome {
        if err.is_transient() {
            warn!(error = %err, "Poll cycle failed");
        } else {
            error!(error = %err, "Poll cycle failed");
        }

        let message = format!("Сбой в работе программы: {err}");
        if self.last_error.as_deref() == Some(message.as_str()) {
            debug!("Fault text unchanged; not re-notifying");
            return CycleOutcome::Faulted {
                message,
                notified: false,
            };
        }

        self.last_error = Some(message.clone());
        self.send_guarded(&message).await;
        CycleOutcome::Faulted {
            message,
            notified: true,
        }
    }

    /// Advance the query window to the server's high-water mark
    ///
    /// Monotonic: an older or absent `current_date` never moves the window
    /// backwards. Not persisted; a restart begins at the configured epoch.
    fn advance_window(&mut self, response: &Value) {
        let next = response
            .get("current_date")
            .and_then(Value::as_i64)
            .unwrap_or_else(|| Utc::now().timestamp());
        if next > self.from_date {
            debug!(from = self.from_date, to = next, "Advancing query window");
            self.from_date = next;
        }
    }

    /// The only place a notification leaves the watcher. Delivery failures
    /// are logged and dropped; a broken notifier must not stop the loop.
    async fn send_guarded(&self, text: &str) {
        info!("Sending notification");
        if let Err(e) = self.notifier.send(text).await {
            error!(error = %e, "Failed to deliver notification");
        }
    }

    /// Last status message sent, if any
    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    /// Set the last sent status (for testing)
    pub fn set_last_status(&mut self, status: Option<String>) {
        self.last_status = status;
    }

    /// Lower bound of the next query window (Unix seconds)
    pub fn window_start(&self) -> i64 {
        self.from_date
    }
}
