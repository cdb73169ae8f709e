//! Network model error types.

/// Errors from looking up or wiring stations in a [`Network`](super::Network).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The name is not a registered station
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// A line was required at a station that has none
    #[error("station {0} is not served by any line")]
    NoServingLine(String),
}
