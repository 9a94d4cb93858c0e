//! Conversion from API DTOs to the bot's directions result.

use crate::domain::LatLng;

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Driving directions for one origin/destination pair.
///
/// `duration` and `distance` keep the API's display text; the fare
/// estimator parses the distance text itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsResult {
    pub duration: String,
    pub distance: String,
    pub origin: LatLng,
    pub destination: LatLng,
}

/// Interpret a directions response.
///
/// Returns `Ok(None)` when the API found no driving route between the
/// places (`ZERO_RESULTS`, `NOT_FOUND`, or an `OK` with no legs).
pub fn convert_response(
    response: DirectionsResponse,
) -> Result<Option<DirectionsResult>, DirectionsError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Ok(None),
        "REQUEST_DENIED" => return Err(DirectionsError::Unauthorized),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => return Err(DirectionsError::RateLimited),
        _ => {
            return Err(DirectionsError::Api {
                message: response.error_message.unwrap_or_default(),
                status: response.status,
            });
        }
    }

    let Some(leg) = response
        .routes
        .into_iter()
        .next()
        .and_then(|route| route.legs.into_iter().next())
    else {
        return Ok(None);
    };

    Ok(Some(DirectionsResult {
        duration: leg.duration.text,
        distance: leg.distance.text,
        origin: leg.start_location,
        destination: leg.end_location,
    }))
}
