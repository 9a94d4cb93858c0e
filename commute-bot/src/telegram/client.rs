//! Telegram Bot API client.

use serde::{Deserialize, Serialize};

use super::error::TelegramError;

/// Default base URL for the Bot API.
const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Message formatting mode understood by the chat client.
const PARSE_MODE: &str = "Markdown";

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Envelope wrapping every Bot API response.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Configuration for the Telegram client.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token, embedded in the request path
    pub bot_token: String,
    /// Chat that receives every message
    pub chat_id: String,
    /// Base URL for the API (defaults to Telegram)
    pub base_url: String,
    /// Request timeout in seconds; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl TelegramConfig {
    /// Create a new config for a bot token and target chat.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Client that posts messages to one chat.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramClient {
    /// Create a new Telegram client with the given configuration.
    pub fn new(config: TelegramConfig) -> Result<Self, TelegramError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            send_url: format!("{}/bot{}/sendMessage", config.base_url, config.bot_token),
            chat_id: config.chat_id,
        })
    }

    /// The chat this client posts to.
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send a Markdown message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: PARSE_MODE,
        };

        let response = self.http.post(&self.send_url).json(&request).send().await?;
        let status = response.status();

        // The Bot API answers 404 for an unknown token
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::NOT_FOUND {
            return Err(TelegramError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TelegramError::RateLimited);
        }

        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse>(&body)
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ApiResponse =
            serde_json::from_str(&body).map_err(|e| TelegramError::Json {
                message: e.to_string(),
            })?;

        if !parsed.ok {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message: parsed.description.unwrap_or_default(),
            });
        }

        Ok(())
    }
}
