//! Fire-and-forget message delivery.

use std::future::Future;

use tracing::{error, info, warn};

use super::client::TelegramClient;

/// Delivers a text message to the user.
///
/// Delivery failures are logged by the implementation and never reported
/// to the caller.
pub trait Notifier {
    fn notify(&self, text: &str) -> impl Future<Output = ()>;
}

impl Notifier for TelegramClient {
    async fn notify(&self, text: &str) {
        match self.send_message(text).await {
            Ok(()) => info!(chat_id = self.chat_id(), "message sent"),
            Err(e) => error!(chat_id = self.chat_id(), error = %e, "failed to send message"),
        }
    }
}

/// A missing notifier drops messages with a warning.
impl<N: Notifier> Notifier for Option<N> {
    async fn notify(&self, text: &str) {
        match self {
            Some(notifier) => notifier.notify(text).await,
            None => warn!(text, "no chat configured, message dropped"),
        }
    }
}
