//! Route planner.
//!
//! Answers "how do I get from this station to that one in the fewest
//! kilometres?" by running Dijkstra's algorithm over the network and then
//! labelling the resulting path with lines, changes and a fare.

mod search;


pub use search::{PlanError, Planner, ShortestPath};
