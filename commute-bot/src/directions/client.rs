//! Google Directions HTTP client.
//!
//! Requests driving directions between two free-text places and converts
//! the first route's first leg into a [`DirectionsResult`].

use std::future::Future;

use tracing::debug;

use super::convert::{DirectionsResult, convert_response};
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default region bias (ccTLD) for geocoding the place names.
const DEFAULT_REGION: &str = "in";

/// Something that can answer driving-directions queries.
///
/// Implemented by [`DirectionsClient`]; tests substitute their own.
pub trait Directions {
    /// Driving directions from `origin` to `destination`.
    ///
    /// `Ok(None)` means the service found no route between the places.
    fn driving(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<Option<DirectionsResult>, DirectionsError>>;
}

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to Google)
    pub base_url: String,
    /// Region bias for resolving place names
    pub region: String,
    /// Request timeout in seconds; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the region bias.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    region: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            region: config.region,
        })
    }

    /// Get driving directions departing now.
    pub async fn get_driving_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<DirectionsResult>, DirectionsError> {
        let url = format!("{}/maps/api/directions/json", self.base_url);

        debug!(origin, destination, "requesting driving directions");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("region", self.region.as_str()),
                ("departure_time", "now"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        debug!(status = %directions.status, routes = directions.routes.len(), "directions response");

        convert_response(directions)
    }
}

impl Directions for DirectionsClient {
    async fn driving(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<DirectionsResult>, DirectionsError> {
        self.get_driving_directions(origin, destination).await
    }
}
