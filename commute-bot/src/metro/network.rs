//! The static metro station dataset.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{LatLng, Station};

use super::error::MetroError;

/// On-disk dataset shape.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    stations: Vec<Station>,
    interchange: String,
}

/// Metro stations plus the one interchange between lines.
///
/// Immutable once loaded. The interchange is guaranteed to be one of the
/// stations.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    stations: Vec<Station>,
    interchange: usize,
}

impl MetroNetwork {
    /// Build a network, resolving the interchange by station name.
    pub fn new(stations: Vec<Station>, interchange: &str) -> Result<Self, MetroError> {
        if stations.is_empty() {
            return Err(MetroError::NoStations);
        }

        let interchange = stations
            .iter()
            .position(|s| s.name == interchange)
            .ok_or_else(|| MetroError::UnknownInterchange(interchange.to_string()))?;

        Ok(Self {
            stations,
            interchange,
        })
    }

    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, MetroError> {
        let file: DatasetFile = serde_json::from_str(json).map_err(|e| MetroError::Json {
            message: e.to_string(),
        })?;
        Self::new(file.stations, &file.interchange)
    }

    /// Load a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MetroError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MetroError::NotFound(path.to_path_buf()),
            _ => MetroError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::from_json(&json)
    }

    /// Load a dataset file, treating any failure as "no metro data".
    ///
    /// A missing file is expected in some deployments and only logged at
    /// debug level; a broken one is a warning.
    pub fn load_optional(path: impl AsRef<Path>) -> Option<Self> {
        match Self::load(path) {
            Ok(network) => {
                debug!(
                    stations = network.len(),
                    interchange = %network.interchange().name,
                    "loaded metro dataset"
                );
                Some(network)
            }
            Err(e @ MetroError::NotFound(_)) => {
                debug!(error = %e, "metro estimates disabled");
                None
            }
            Err(e) => {
                warn!(error = %e, "metro dataset unusable, metro estimates disabled");
                None
            }
        }
    }

    /// All stations, in dataset order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The station where the lines meet.
    pub fn interchange(&self) -> &Station {
        &self.stations[self.interchange]
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: a network has at least one station.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The station closest to `point` and its distance in kilometres.
    ///
    /// Ties go to the station listed first.
    pub fn nearest(&self, point: LatLng) -> (&Station, f64) {
        let first = &self.stations[0];
        let mut best = (first, point.haversine_km(&first.location()));

        for station in &self.stations[1..] {
            let km = point.haversine_km(&station.location());
            if km < best.1 {
                best = (station, km);
            }
        }

        best
    }
}
