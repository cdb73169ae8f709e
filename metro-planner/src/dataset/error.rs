//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::{Coordinates, InvalidLine};

/// Errors that can occur while loading a network dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or has the wrong shape
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A station registration has an empty name
    #[error("station record {index} has a blank name")]
    BlankStationName { index: usize },

    /// A station registration lists no lines
    #[error("station {name} is registered without any line")]
    StationWithoutLines { name: String },

    /// Latitude or longitude out of range, or not finite
    #[error("station {name} has invalid coordinates {coordinates}")]
    InvalidCoordinates {
        name: String,
        coordinates: Coordinates,
    },

    /// An edge names a station that was never registered
    #[error("edge {from} - {to} references unregistered station {missing}")]
    UnknownEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    /// A line tag is blank
    #[error("invalid line tag on {context}: {source}")]
    InvalidLine {
        context: String,
        #[source]
        source: InvalidLine,
    },
}
