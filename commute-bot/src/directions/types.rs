//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response. Only
//! the fields the bot reads are declared; `routes` and `legs` default to
//! empty because error responses omit them.

use serde::Deserialize;

use crate::domain::LatLng;

/// Top-level directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `NOT_FOUND`, `REQUEST_DENIED`, ...
    pub status: String,

    #[serde(default)]
    pub routes: Vec<Route>,

    /// Human-readable detail, present on most failure statuses.
    pub error_message: Option<String>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One leg of a route. Without waypoints a route has exactly one.
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    pub duration: TextValue,
    pub distance: TextValue,
    pub start_location: LatLng,
    pub end_location: LatLng,
}

/// A quantity's localized display text (e.g. `"12.3 km"`).
///
/// The API also sends a numeric `value` (seconds or metres); the bot
/// reports the text as given, so only that is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
}
