//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LineSet;

/// Dense index of a station inside a [`Network`](crate::network::Network).
///
/// Ids are handed out in first-registration order, so comparing ids is a
/// deterministic tie-break that only depends on load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub(crate) u32);

impl StationId {
    /// Position of the station in the network's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite, with latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A named stop with a position and the lines serving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub coordinates: Coordinates,
    pub lines: LineSet,
}

impl Station {
    pub fn new(name: impl Into<String>, coordinates: Coordinates, lines: LineSet) -> Self {
        Self {
            name: name.into(),
            coordinates,
            lines,
        }
    }

    /// Returns true if more than one line serves this station.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }
}
