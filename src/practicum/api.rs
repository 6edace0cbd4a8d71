//! Practicum homework status API client
//!
//! Implements the StatusClient trait against the real endpoint. The client
//! only moves bytes: authorization header, one GET per call, HTTP status
//! classification. Schema checking belongs to the validator.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::{PracticumError, StatusClient};

/// Production endpoint for homework statuses
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Practicum homework status API client
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: Client,
}

impl PracticumClient {
    /// Create a client against the production endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, token)
    }

    /// Create a client against a custom endpoint (used by HTTP-level tests)
    pub fn with_endpoint(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        // No request timeout configured: the transport defaults apply, and
        // the poll loop has no deadline tighter than its own interval.
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl StatusClient for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError> {
        debug!(from_date, "fetch: called");
        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        // The API contract is exactly 200 on success
        let status = response.status().as_u16();
        if status != 200 {
            warn!(status, "fetch: unexpected HTTP status");
            let message = response.text().await.unwrap_or_default();
            return Err(PracticumError::HttpStatus { status, message });
        }

        let body: Value = response.json().await?;
        debug!("fetch: success");
        Ok(body)
    }
}
