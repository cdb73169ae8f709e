//! Network model: stations, lines and weighted adjacencies.
//!
//! The network is built once by the dataset loader and then only read. It
//! owns every station and edge; the planner refers to stations by
//! [`StationId`](crate::domain::StationId) and never holds references across
//! a mutation.

mod error;
mod graph;

pub use error::NetworkError;
pub use graph::{Edge, Neighbour, Network};
