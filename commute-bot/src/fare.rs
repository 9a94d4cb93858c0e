//! Road fare estimates for autos and cabs.
//!
//! Fares are linear in distance with a flat base. The upper end of each
//! range adds a fixed spread for waiting time and surge.

use std::fmt;

/// Unit suffix the distance text must carry.
const KM_SUFFIX: &str = " km";

/// Errors from fare estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// Distance text was not `"<number> km"`
    #[error("unsupported distance format: {0:?}")]
    UnsupportedDistance(String),
}

/// A linear fare rule: `base + per_km * km`, quoted up to `+ spread`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareFormula {
    pub base: f64,
    pub per_km: f64,
    pub spread: f64,
}

impl FareFormula {
    /// Auto-rickshaw fare rule.
    pub const AUTO: FareFormula = FareFormula {
        base: 30.0,
        per_km: 15.0,
        spread: 30.0,
    };

    /// Cab fare rule.
    pub const CAB: FareFormula = FareFormula {
        base: 70.0,
        per_km: 20.0,
        spread: 50.0,
    };

    /// Fare range for a trip of `km` kilometres.
    pub fn range(&self, km: f64) -> FareRange {
        let low = self.base + self.per_km * km;
        FareRange {
            low,
            high: low + self.spread,
        }
    }
}

/// An estimated fare range in rupees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareRange {
    pub low: f64,
    pub high: f64,
}

impl fmt::Display for FareRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.0} - ₹{:.0}", self.low, self.high)
    }
}

/// Auto and cab estimates for one trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadFares {
    pub auto: FareRange,
    pub cab: FareRange,
}

impl RoadFares {
    /// Estimate fares for a distance in kilometres.
    pub fn for_distance(km: f64) -> Self {
        Self {
            auto: FareFormula::AUTO.range(km),
            cab: FareFormula::CAB.range(km),
        }
    }

    /// Estimate fares from the directions API's distance text.
    pub fn from_distance_text(text: &str) -> Result<Self, FareError> {
        parse_distance_km(text).map(Self::for_distance)
    }
}

/// Parse a distance such as `"12.3 km"` into kilometres.
///
/// Only the metric `" km"` form is understood. Metres (`"850 m"`), miles
/// and grouped thousands (`"1,204 km"`) are rejected.
pub fn parse_distance_km(text: &str) -> Result<f64, FareError> {
    let unsupported = || FareError::UnsupportedDistance(text.to_string());

    let number = text.trim().strip_suffix(KM_SUFFIX).ok_or_else(unsupported)?;
    let km: f64 = number.trim().parse().map_err(|_| unsupported())?;

    if !km.is_finite() || km < 0.0 {
        return Err(unsupported());
    }

    Ok(km)
}
