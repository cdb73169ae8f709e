//! Minimum-distance search over the network.
//!
//! Single-source shortest paths with a binary-heap frontier and lazy
//! deletion: stale frontier entries are skipped when popped instead of being
//! decreased in place. The search stops as soon as the destination is
//! settled.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::StationId;
use crate::itinerary::{FareTable, Itinerary, annotate};
use crate::network::{Network, NetworkError};

/// Error from planning a trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// No path joins the two stations, or one of them is not in the network
    #[error("no route from {origin} to {destination}")]
    Unreachable { origin: String, destination: String },

    /// The path could not be annotated
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// A minimum-distance path between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Stations from source to destination, both included.
    pub stations: Vec<StationId>,
    /// Sum of the edge weights along `stations`.
    pub distance_km: u32,
}

impl ShortestPath {
    /// Station names along the path.
    pub fn names<'n>(&self, network: &'n Network) -> Vec<&'n str> {
        self.stations.iter().map(|&id| network.name(id)).collect()
    }

    /// Number of stations on the path.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Route planner over a loaded network.
///
/// Holds only shared references, so any number of planners can query the
/// same network concurrently.
pub struct Planner<'a> {
    network: &'a Network,
    fares: &'a FareTable,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, fares: &'a FareTable) -> Self {
        Self { network, fares }
    }

    /// Minimum-distance path from `source` to `destination`.
    ///
    /// Returns `None` when either name is unknown or no path exists.
    pub fn shortest_path(&self, source: &str, destination: &str) -> Option<ShortestPath> {
        let from = self.network.station_id(source)?;
        let to = self.network.station_id(destination)?;
        self.shortest_path_between(from, to)
    }

    /// Minimum-distance path between two station ids.
    ///
    /// Ties between equally short frontier entries go to the lower station
    /// id, and a station's predecessor is only replaced by a strictly shorter
    /// path, so the result is fixed by the load order.
    pub fn shortest_path_between(&self, from: StationId, to: StationId) -> Option<ShortestPath> {
        let n = self.network.len();
        let mut dist: Vec<Option<u32>> = vec![None; n];
        let mut prev: Vec<Option<StationId>> = vec![None; n];
        let mut frontier = BinaryHeap::new();
        let mut settled = 0usize;

        dist[from.index()] = Some(0);
        frontier.push(Reverse((0u32, from)));

        while let Some(Reverse((d, u))) = frontier.pop() {
            if dist[u.index()].is_some_and(|best| d > best) {
                continue;
            }
            settled += 1;
            trace!(
                station = self.network.name(u),
                distance_km = d,
                "Settled station"
            );

            if u == to {
                break;
            }

            for edge in self.network.edges_from(u) {
                let candidate = d.saturating_add(edge.weight_km);
                let v = edge.to.index();
                if dist[v].is_none_or(|best| candidate < best) {
                    dist[v] = Some(candidate);
                    prev[v] = Some(u);
                    frontier.push(Reverse((candidate, edge.to)));
                }
            }
        }

        let Some(distance_km) = dist[to.index()] else {
            debug!(
                source = self.network.name(from),
                destination = self.network.name(to),
                settled,
                "No route found"
            );
            return None;
        };

        let mut stations = vec![to];
        let mut at = to;
        while at != from {
            // Every station with a distance other than the source has a predecessor.
            at = prev[at.index()]?;
            stations.push(at);
        }
        stations.reverse();

        debug!(
            source = self.network.name(from),
            destination = self.network.name(to),
            distance_km,
            stations = stations.len(),
            settled,
            "Shortest path found"
        );

        Some(ShortestPath {
            stations,
            distance_km,
        })
    }

    /// Plan a trip: shortest path, line annotations and fare.
    pub fn plan(&self, source: &str, destination: &str) -> Result<Itinerary, PlanError> {
        let route = self
            .shortest_path(source, destination)
            .ok_or_else(|| PlanError::Unreachable {
                origin: source.to_string(),
                destination: destination.to_string(),
            })?;

        let path: Vec<String> = route
            .names(self.network)
            .into_iter()
            .map(str::to_string)
            .collect();
        let annotations = annotate(self.network, &path)?;

        Ok(Itinerary {
            path,
            distance_km: route.distance_km,
            fare: self.fares.fare_for(route.distance_km),
            annotations,
        })
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }
}
