//! Itineraries: the annotated answer to a route query.
//!
//! An [`Itinerary`] is what the console front-end prints: the stations in
//! order, the line taken from each, the whole-kilometre distance and the fare
//! from the [`FareTable`].

mod annotate;
mod fare;
mod render;

use serde::Serialize;

use crate::domain::Line;

pub use annotate::{SegmentAnnotation, annotate, change_count};
pub use fare::{FareBand, FareTable, InvalidFareTable};

/// A planned trip.
///
/// # Invariants
///
/// - `path` is non-empty and starts and ends at the queried stations
/// - `annotations` has exactly one entry per station of `path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub path: Vec<String>,
    pub distance_km: u32,
    pub fare: u32,
    pub annotations: Vec<SegmentAnnotation>,
}

impl Itinerary {
    pub fn source(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }

    pub fn destination(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }

    /// Stations where the traveller changes line, with the line changed to.
    pub fn changes(&self) -> impl Iterator<Item = (&str, &Line)> {
        self.path
            .iter()
            .zip(&self.annotations)
            .filter_map(|(station, annotation)| match annotation {
                SegmentAnnotation::ChangeTo(line) => Some((station.as_str(), line)),
                SegmentAnnotation::TraverseOn(_) => None,
            })
    }

    pub fn change_count(&self) -> usize {
        change_count(&self.annotations)
    }
}
