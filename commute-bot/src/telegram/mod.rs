//! Telegram chat delivery.
//!
//! Messages go to a single fixed chat via the Bot API `sendMessage`
//! method with Markdown formatting.

mod client;
mod error;
mod notifier;

pub use client::{TelegramClient, TelegramConfig};
pub use error::TelegramError;
pub use notifier::Notifier;
