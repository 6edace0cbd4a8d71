//! StatusClient trait definition

use async_trait::async_trait;
use serde_json::Value;

use super::PracticumError;

/// Stateless homework status source - each poll is an independent request
///
/// The watcher only ever asks "what changed since this timestamp"; keeping
/// the seam this narrow lets tests drive the whole poll loop with a
/// scripted double.
#[async_trait]
pub trait StatusClient: Send + Sync {
    /// Fetch homework statuses changed since `from_date` (Unix seconds)
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError>;
}
