//! Metro station types.

use std::fmt;

use serde::Deserialize;

use super::LatLng;

/// The metro line a station belongs to.
///
/// `Both` marks a station that serves both lines (the interchange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetroLine {
    Purple,
    Green,
    Both,
}

impl fmt::Display for MetroLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetroLine::Purple => f.write_str("Purple"),
            MetroLine::Green => f.write_str("Green"),
            MetroLine::Both => f.write_str("Purple/Green"),
        }
    }
}

/// A metro station from the static dataset.
///
/// `id` is the station's signed stop position along its line, so the
/// number of stops between two stations on the same line is the absolute
/// difference of their ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub line: MetroLine,
}

impl Station {
    /// The station's position.
    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }

    /// Whether a train runs directly between this station and `other`.
    pub fn shares_line_with(&self, other: &Station) -> bool {
        self.line == other.line || self.line == MetroLine::Both || other.line == MetroLine::Both
    }

    /// Stops travelled between this station and `other` along one line.
    pub fn stops_to(&self, other: &Station) -> u32 {
        self.id.abs_diff(other.id)
    }
}
