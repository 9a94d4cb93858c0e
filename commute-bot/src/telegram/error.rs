//! Telegram client error types.

/// Errors from the Telegram Bot API client.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// HTTP request failed. The URL is stripped because it embeds the bot token.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Bot token rejected
    #[error("unauthorized: check TELEGRAM_BOT_TOKEN")]
    Unauthorized,

    /// Too many messages
    #[error("rate limited by Telegram")]
    RateLimited,

    /// API returned an error status or `"ok": false`
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        TelegramError::Http(err.without_url())
    }
}
