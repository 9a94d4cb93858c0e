//! Domain types for the commute bot.
//!
//! Values here are validated at construction: a `RouteQuery` always has a
//! non-empty origin and destination, and stations come from the typed
//! dataset.

mod coords;
mod error;
mod query;
mod station;

pub use coords::LatLng;
pub use error::QueryError;
pub use query::{RouteQuery, title_case};
pub use station::{MetroLine, Station};
