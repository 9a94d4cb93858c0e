//! Geographic coordinates.

use geo::HaversineDistance;
use serde::Deserialize;

/// A latitude/longitude pair in decimal degrees.
///
/// Field names follow the mapping API (`lat`/`lng`) so the type can be
/// deserialized straight from a directions response.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle (haversine) distance to `other` in kilometres.
    pub fn haversine_km(&self, other: &LatLng) -> f64 {
        self.point().haversine_distance(&other.point()) / 1000.0
    }

    /// The same position as a `geo` point (x = longitude, y = latitude).
    pub fn point(&self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}
