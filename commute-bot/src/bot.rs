//! One invocation of the bot, start to finish.
//!
//! The user's message is parsed, acknowledged, looked up, and answered.
//! Every failure ends in a chat reply; nothing propagates out of
//! [`run`].

use tracing::{error, info};

use crate::config::{self, BotConfig};
use crate::directions::{Directions, DirectionsClient, DirectionsError};
use crate::domain::RouteQuery;
use crate::fare::{FareError, RoadFares};
use crate::message::{self, CommuteEstimate};
use crate::metro::{MetroConfig, MetroNetwork};
use crate::telegram::{Notifier, TelegramClient};

/// Errors that abort a commute lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Directions(#[from] DirectionsError),

    #[error(transparent)]
    Fare(#[from] FareError),
}

/// Answers commute queries with road and metro estimates.
pub struct CommuteBot<D, N> {
    directions: D,
    notifier: N,
    metro: Option<MetroNetwork>,
    metro_config: MetroConfig,
}

impl<D: Directions, N: Notifier> CommuteBot<D, N> {
    /// Create a bot. Without a metro network, replies omit the metro section.
    pub fn new(directions: D, notifier: N, metro: Option<MetroNetwork>) -> Self {
        Self {
            directions,
            notifier,
            metro,
            metro_config: MetroConfig::default(),
        }
    }

    /// Use non-default metro estimate parameters.
    pub fn with_metro_config(mut self, config: MetroConfig) -> Self {
        self.metro_config = config;
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handle one user message: acknowledge, look up, reply.
    pub async fn handle(&self, text: &str) {
        let query = match RouteQuery::parse(text) {
            Ok(query) => query,
            Err(e) => {
                info!(error = %e, "unrecognised request");
                self.notifier.notify(message::USAGE).await;
                return;
            }
        };

        info!(?query, "planning commute");
        self.notifier.notify(&message::searching(&query)).await;

        let reply = self.commute_options(&query).await;
        self.notifier.notify(&reply).await;
    }

    /// The reply text for a query, including the no-route and failure cases.
    pub async fn commute_options(&self, query: &RouteQuery) -> String {
        match self.estimate(query).await {
            Ok(Some(estimate)) => estimate.render(query),
            Ok(None) => {
                info!(?query, "no driving route");
                message::NO_ROUTE.to_string()
            }
            Err(e) => {
                error!(?query, error = %e, "commute lookup failed");
                message::lookup_failed(query)
            }
        }
    }

    /// Road and metro estimates, or `None` if there is no driving route.
    pub async fn estimate(&self, query: &RouteQuery) -> Result<Option<CommuteEstimate>, LookupError> {
        let Some(directions) = self
            .directions
            .driving(query.origin(), query.destination())
            .await?
        else {
            return Ok(None);
        };

        let fares = RoadFares::from_distance_text(&directions.distance)?;
        let road = message::road_block(&directions, &fares);

        let metro_estimate = self.metro.as_ref().and_then(|network| {
            network.estimate(directions.origin, directions.destination, &self.metro_config)
        });
        let metro = message::metro_block(metro_estimate.as_ref());

        Ok(Some(CommuteEstimate { road, metro }))
    }
}

/// Run one invocation with configuration from `env`.
///
/// Missing configuration is reported to the chat when the Telegram
/// settings themselves are present; no directions lookup is made.
pub async fn run(env: impl Fn(&str) -> Option<String>) {
    let config = match BotConfig::from_lookup(&env) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration incomplete");
            let notifier = config::telegram_from_lookup(&env).and_then(|tg| {
                TelegramClient::new(tg)
                    .inspect_err(|e| error!(error = %e, "failed to create Telegram client"))
                    .ok()
            });
            notifier.notify(message::CONFIG_ERROR).await;
            return;
        }
    };

    let notifier = match TelegramClient::new(config.telegram) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create Telegram client");
            return;
        }
    };

    let directions = match DirectionsClient::new(config.directions) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create directions client");
            notifier.notify(message::GENERIC_ERROR).await;
            return;
        }
    };

    let metro = MetroNetwork::load_optional(&config.metro_stations_path);

    CommuteBot::new(directions, notifier, metro)
        .handle(&config.user_message)
        .await;
}
