//! Environment configuration.
//!
//! Everything comes from environment variables, read through a lookup
//! function so callers can substitute their own source.

use std::path::PathBuf;

use crate::directions::DirectionsConfig;
use crate::telegram::TelegramConfig;

/// Bot token for the Telegram Bot API.
pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Google Maps API key.
pub const ENV_MAPS_API_KEY: &str = "GOOGLE_API_KEY";
/// Chat that receives the replies.
pub const ENV_CHAT_ID: &str = "CHAT_ID";
/// The user's request text.
pub const ENV_USER_MESSAGE: &str = "USER_MESSAGE";
/// Optional path to the metro station dataset.
pub const ENV_METRO_STATIONS_PATH: &str = "METRO_STATIONS_PATH";
/// Optional Telegram API base URL override.
pub const ENV_TELEGRAM_API_URL: &str = "TELEGRAM_API_URL";
/// Optional directions API base URL override.
pub const ENV_DIRECTIONS_API_URL: &str = "DIRECTIONS_API_URL";

/// Dataset location used when `METRO_STATIONS_PATH` is unset.
pub const DEFAULT_METRO_STATIONS_PATH: &str = "data/metro_stations.json";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Required variables unset or empty
    #[error("missing environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub directions: DirectionsConfig,
    pub user_message: String,
    pub metro_stations_path: PathBuf,
}

/// Look `key` up in the process environment.
///
/// This is the lookup the binary passes to [`crate::bot::run`]. Values that
/// are not valid Unicode count as unset.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl BotConfig {
    /// Read configuration through `lookup`.
    ///
    /// Empty values count as missing. All missing variables are reported
    /// together.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let bot_token = get(ENV_BOT_TOKEN);
        let api_key = get(ENV_MAPS_API_KEY);
        let chat_id = get(ENV_CHAT_ID);
        let user_message = get(ENV_USER_MESSAGE);

        let (Some(bot_token), Some(api_key), Some(chat_id), Some(user_message)) =
            (bot_token.clone(), api_key.clone(), chat_id.clone(), user_message.clone())
        else {
            let missing = [
                (ENV_BOT_TOKEN, bot_token.is_none()),
                (ENV_MAPS_API_KEY, api_key.is_none()),
                (ENV_CHAT_ID, chat_id.is_none()),
                (ENV_USER_MESSAGE, user_message.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            return Err(ConfigError::Missing(missing));
        };

        let mut telegram = TelegramConfig::new(bot_token, chat_id);
        if let Some(url) = get(ENV_TELEGRAM_API_URL) {
            telegram = telegram.with_base_url(url);
        }

        let mut directions = DirectionsConfig::new(api_key);
        if let Some(url) = get(ENV_DIRECTIONS_API_URL) {
            directions = directions.with_base_url(url);
        }

        let metro_stations_path: PathBuf = get(ENV_METRO_STATIONS_PATH)
            .unwrap_or_else(|| DEFAULT_METRO_STATIONS_PATH.to_string())
            .into();

        Ok(Self {
            telegram,
            directions,
            user_message,
            metro_stations_path,
        })
    }
}

/// Telegram settings alone, for reporting a configuration error.
///
/// Returns `None` unless both the bot token and chat id are set.
pub fn telegram_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<TelegramConfig> {
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    let config = TelegramConfig::new(get(ENV_BOT_TOKEN)?, get(ENV_CHAT_ID)?);
    Some(match get(ENV_TELEGRAM_API_URL) {
        Some(url) => config.with_base_url(url),
        None => config,
    })
}
