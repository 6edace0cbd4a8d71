//! Credential loading from the environment

use eyre::Result;

/// Environment variable holding the Practicum OAuth token
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";

/// Environment variable holding the Telegram bot token
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the Telegram chat id
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// The three tokens the bot cannot run without
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth token for the homework status API
    pub practicum_token: String,

    /// Bot token for the Telegram API
    pub telegram_token: String,

    /// Chat the notifications go to
    pub chat_id: String,
}

impl Credentials {
    /// Read all three credentials from the environment
    ///
    /// Fails on the first variable that is unset or empty, naming it. Call
    /// this early in startup to fail fast with a clear error message.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            practicum_token: require_env(PRACTICUM_TOKEN_VAR)?,
            telegram_token: require_env(TELEGRAM_TOKEN_VAR)?,
            chat_id: require_env(TELEGRAM_CHAT_ID_VAR)?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(eyre::eyre!(
            "Required credential not found. Set the {} environment variable.",
            name
        )),
    }
}
