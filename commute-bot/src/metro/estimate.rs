//! Metro fare and travel-time estimates.
//!
//! Picks the nearest station to each end of the trip and counts stops,
//! changing once at the interchange when the two stations are on
//! different lines. Fare and time are linear in the stop count.

use tracing::debug;

use crate::domain::{LatLng, Station};

use super::network::MetroNetwork;

/// Tunables for the metro estimate.
///
/// The defaults are rough approximations of Namma Metro fares and
/// timings, not published figures.
#[derive(Debug, Clone)]
pub struct MetroConfig {
    /// Furthest a rider is assumed to walk to or from a station (km).
    pub max_walk_km: f64,

    /// Fare for a single-stop trip (rupees).
    pub base_fare: u32,

    /// Fare added per additional stop (rupees).
    pub fare_per_stop: u32,

    /// Fare cap (rupees).
    pub max_fare: u32,

    /// Running time per stop (minutes).
    pub minutes_per_stop: u32,

    /// Walking, security and waiting time added to every trip (minutes).
    pub overhead_minutes: u32,
}

impl MetroConfig {
    /// Fare for a trip of `stops` stops.
    pub fn fare(&self, stops: u32) -> u32 {
        let fare = self.base_fare + stops.saturating_sub(1) * self.fare_per_stop;
        fare.min(self.max_fare)
    }

    /// Door-to-door minutes for a trip of `stops` stops.
    pub fn minutes(&self, stops: u32) -> u32 {
        stops * self.minutes_per_stop + self.overhead_minutes
    }
}

impl Default for MetroConfig {
    fn default() -> Self {
        Self {
            max_walk_km: 3.0,
            base_fare: 10,
            fare_per_stop: 5,
            max_fare: 60,
            minutes_per_stop: 3,
            overhead_minutes: 15,
        }
    }
}

/// A metro option between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct MetroEstimate<'a> {
    /// Station to board at
    pub board: &'a Station,

    /// Station to alight at
    pub alight: &'a Station,

    /// Where to change lines, if the stations are on different lines
    pub change_at: Option<&'a Station>,

    /// Stops travelled, counting both legs when changing
    pub stops: u32,

    /// Estimated fare (rupees)
    pub fare: u32,

    /// Estimated travel time (minutes)
    pub minutes: u32,
}

impl MetroNetwork {
    /// Estimate a metro trip between two coordinates.
    ///
    /// Returns `None` when either end is further than
    /// [`MetroConfig::max_walk_km`] from its nearest station, or when both
    /// ends share the same nearest station.
    pub fn estimate(
        &self,
        origin: LatLng,
        destination: LatLng,
        config: &MetroConfig,
    ) -> Option<MetroEstimate<'_>> {
        let (board, board_km) = self.nearest(origin);
        let (alight, alight_km) = self.nearest(destination);

        debug!(
            board = %board.name,
            board_km,
            alight = %alight.name,
            alight_km,
            "nearest metro stations"
        );

        if board_km > config.max_walk_km || alight_km > config.max_walk_km {
            return None;
        }

        if board == alight {
            return None;
        }

        let (change_at, stops) = if board.shares_line_with(alight) {
            (None, board.stops_to(alight))
        } else {
            let interchange = self.interchange();
            (
                Some(interchange),
                board.stops_to(interchange) + interchange.stops_to(alight),
            )
        };

        Some(MetroEstimate {
            board,
            alight,
            change_at,
            stops,
            fare: config.fare(stops),
            minutes: config.minutes(stops),
        })
    }
}
