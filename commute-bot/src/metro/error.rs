//! Metro dataset error types.

use std::path::PathBuf;

/// Errors from loading the metro station dataset.
#[derive(Debug, thiserror::Error)]
pub enum MetroError {
    /// Dataset file does not exist
    #[error("metro dataset not found at {0}")]
    NotFound(PathBuf),

    /// Dataset file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset is not valid JSON of the expected shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Dataset has no stations
    #[error("metro dataset has no stations")]
    NoStations,

    /// The named interchange is not one of the stations
    #[error("interchange {0:?} is not a station in the dataset")]
    UnknownInterchange(String),
}
