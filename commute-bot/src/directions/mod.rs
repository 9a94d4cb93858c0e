//! Driving directions client.
//!
//! Talks to the Google Directions API. Only the first leg of the first
//! route is used: its display duration and distance, and the resolved
//! start and end coordinates that feed the metro estimator.

mod client;
mod convert;
mod error;
mod types;

pub use client::{Directions, DirectionsClient, DirectionsConfig};
pub use convert::{DirectionsResult, convert_response};
pub use error::DirectionsError;
pub use types::{DirectionsResponse, Leg, Route, TextValue};
