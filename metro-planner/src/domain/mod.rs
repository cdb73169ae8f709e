//! Domain types for the metro route planner.
//!
//! Value types shared by the network model, the planner and the dataset
//! loader. Types that carry an invariant enforce it at construction time.

mod line;
mod station;

pub use line::{InvalidLine, Line, LineSet};
pub use station::{Coordinates, Station, StationId};
