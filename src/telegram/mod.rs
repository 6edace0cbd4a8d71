//! Telegram notification module
//!
//! Delivery only; what to send and when is the watcher's decision.

mod bot;
mod error;
pub mod notifier;

pub use bot::{DEFAULT_API_BASE, TelegramNotifier};
pub use error::NotifyError;
pub use notifier::Notifier;
