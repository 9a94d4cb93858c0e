//! Chat message texts.
//!
//! Every reply the bot sends is built here. Messages use Telegram's
//! legacy Markdown: `*bold*`, `_italic_` and backtick code spans.

use crate::directions::DirectionsResult;
use crate::domain::RouteQuery;
use crate::fare::RoadFares;
use crate::metro::MetroEstimate;

/// Reply to a message that is not `"<origin> to <destination>"`.
pub const USAGE: &str =
    "Please format your request as: `Origin to Destination` (e.g., `Koramangala to Majestic`).";

/// Reply when the bot is missing configuration.
pub const CONFIG_ERROR: &str = "A configuration error occurred. Please contact the administrator.";

/// Reply when the bot could not start handling the request.
pub const GENERIC_ERROR: &str = "Oops! Something went wrong. Please try again.";

/// Reply when the directions service has no driving route.
pub const NO_ROUTE: &str =
    "Could not find driving directions. Please check if the locations are correct.";

const DIVIDER: &str = "---------------------------------------";

const FOOTER: &str = "_(Full Bus data coming soon!)_";

/// Estimates for one commute, already formatted.
///
/// `metro` is empty when there is no sensible metro option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommuteEstimate {
    pub road: String,
    pub metro: String,
}

impl CommuteEstimate {
    /// The full route report for `query`.
    pub fn render(&self, query: &RouteQuery) -> String {
        let mut out = format!(
            "📍 *Route: {} to {}*\n{DIVIDER}\n",
            query.origin_title(),
            query.destination_title()
        );
        out.push_str(&self.road);
        out.push('\n');
        if !self.metro.is_empty() {
            out.push_str(&self.metro);
            out.push('\n');
        }
        out.push_str(FOOTER);
        out
    }
}

/// Acknowledgement sent before the directions lookup.
pub fn searching(query: &RouteQuery) -> String {
    format!(
        "Searching for routes from *{}* to *{}*...",
        query.origin_title(),
        query.destination_title()
    )
}

/// Reply when the lookup itself failed.
pub fn lookup_failed(query: &RouteQuery) -> String {
    format!(
        "Sorry, I couldn't fetch commute data for '{}' to '{}'. Please try again.",
        query.origin(),
        query.destination()
    )
}

/// The cab/auto section.
pub fn road_block(directions: &DirectionsResult, fares: &RoadFares) -> String {
    format!(
        "🚗 *Cab/Auto Estimate*\n   \
         - *Travel Time:* {}\n   \
         - *Distance:* {}\n   \
         - *Est. Auto Fare:* {}\n   \
         - *Est. Cab Fare:* {}\n",
        directions.duration, directions.distance, fares.auto, fares.cab
    )
}

/// The metro section, or an empty string when there is no estimate.
pub fn metro_block(estimate: Option<&MetroEstimate<'_>>) -> String {
    let Some(estimate) = estimate else {
        return String::new();
    };

    let change = estimate
        .change_at
        .map(|station| format!("   - *Change at:* {}\n", station.name))
        .unwrap_or_default();

    format!(
        "🚇 *Metro Estimate*\n   \
         - *Board at:* {} ({})\n\
         {change}   \
         - *Alight at:* {} ({})\n   \
         - *Stops:* {}\n   \
         - *Est. Travel Time:* ~{} mins\n   \
         - *Est. Metro Fare:* ₹{}\n",
        estimate.board.name,
        estimate.board.line,
        estimate.alight.name,
        estimate.alight.line,
        estimate.stops,
        estimate.minutes,
        estimate.fare
    )
}
