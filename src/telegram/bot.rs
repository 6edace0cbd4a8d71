//! Telegram Bot API notifier
//!
//! Sends messages through the Bot API `sendMessage` method. The chat id is
//! fixed at construction; this bot never addresses anyone else.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Notifier, NotifyError};

/// Production Telegram Bot API base
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API notifier for a single chat
pub struct TelegramNotifier {
    api_base: String,
    token: String,
    chat_id: String,
    http: Client,
}

/// `sendMessage` request payload
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// The part of the Bot API reply envelope we care about
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    /// Create a notifier against the production Bot API
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_api_base(DEFAULT_API_BASE, token, chat_id)
    }

    /// Create a notifier against a custom API base (used by HTTP-level tests)
    pub fn with_api_base(
        api_base: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            token: token.into(),
            chat_id: chat_id.into(),
            http: Client::new(),
        }
    }

    fn send_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        debug!(chat_id = %self.chat_id, "send: called");
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .http
            .post(self.send_url())
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotifyError::HttpStatus { status, message });
        }

        let reply: ApiReply = response.json().await?;
        if !reply.ok {
            return Err(NotifyError::Rejected {
                description: reply.description.unwrap_or_default(),
            });
        }

        info!("send: message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_url_embeds_token() {
        let notifier = TelegramNotifier::new("123:abc", "42");
        assert_eq!(
            notifier.send_url(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_send_url_uses_custom_base() {
        let notifier = TelegramNotifier::with_api_base("http://127.0.0.1:9999", "123:abc", "42");
        assert_eq!(notifier.send_url(), "http://127.0.0.1:9999/bot123:abc/sendMessage");
    }

    #[test]
    fn test_payload_shape() {
        let payload = SendMessage {
            chat_id: "42",
            text: "Работа взята на проверку ревьюером.",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "chat_id": "42",
                "text": "Работа взята на проверку ревьюером.",
            })
        );
    }

    #[test]
    fn test_api_reply_parses_failure() {
        let reply: ApiReply =
            serde_json::from_str(r#"{"ok": false, "description": "Bad Request: chat not found"}"#)
                .unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.description.as_deref(), Some("Bad Request: chat not found"));
    }
}
