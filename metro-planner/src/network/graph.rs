//! In-memory undirected multigraph of stations and adjacencies.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Coordinates, LineSet, Station, StationId};

use super::error::NetworkError;

/// One direction of an adjacency, stored on its origin station.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Station at the other end.
    pub to: StationId,
    /// Whole kilometres between the two stations.
    pub weight_km: u32,
    /// Lines that run along this hop.
    pub lines: LineSet,
}

/// A neighbour of a station, as seen through [`Network::neighbours`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a> {
    pub name: &'a str,
    pub weight_km: u32,
    pub lines: &'a LineSet,
}

/// The station table and the adjacency lists.
///
/// Stations live in an arena indexed by [`StationId`]; names are only used at
/// the API boundary. Every adjacency is recorded in both directions with the
/// same weight and line-set, so callers never add half-edges.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::{Coordinates, Line, LineSet};
/// use metro_planner::network::Network;
///
/// let yellow: LineSet = [Line::parse("Yellow Line").unwrap()].into_iter().collect();
///
/// let mut network = Network::new();
/// let badli = Coordinates::new(28.748035, 77.134733);
/// let rohini = Coordinates::new(28.736278, 77.124249);
/// network.add_station("Samaypur Badli", badli, yellow.clone());
/// network.add_station("Rohini Sector 18, 19", rohini, yellow.clone());
/// network.add_edge("Samaypur Badli", "Rohini Sector 18, 19", 1, yellow).unwrap();
///
/// assert_eq!(network.neighbours("Rohini Sector 18, 19").len(), 1);
/// assert!(network.neighbours("Nowhere").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    adjacency: Vec<Vec<Edge>>,
    index: HashMap<String, StationId>,
    edge_count: usize,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station, or augment one that already exists.
    ///
    /// Re-registering a name replaces its coordinates and adds the new lines
    /// to its line-set. Edge weights already derived from the old coordinates
    /// are left untouched.
    pub fn add_station(
        &mut self,
        name: &str,
        coordinates: Coordinates,
        lines: LineSet,
    ) -> StationId {
        if let Some(&id) = self.index.get(name) {
            let station = &mut self.stations[id.index()];
            if station.coordinates != coordinates {
                debug!(
                    station = name,
                    from = %station.coordinates,
                    to = %coordinates,
                    "Station re-registered at new coordinates"
                );
            }
            station.coordinates = coordinates;
            station.lines.union_with(&lines);
            return id;
        }

        let id = StationId(self.stations.len() as u32);
        self.stations.push(Station::new(name, coordinates, lines));
        self.adjacency.push(Vec::new());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Add an undirected adjacency between two registered stations.
    ///
    /// Parallel edges are allowed; the planner simply takes the cheapest.
    pub fn add_edge(
        &mut self,
        a: &str,
        b: &str,
        weight_km: u32,
        lines: LineSet,
    ) -> Result<(), NetworkError> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        self.connect(from, to, weight_km, lines);
        Ok(())
    }

    /// Add an undirected adjacency between two station ids.
    pub(crate) fn connect(
        &mut self,
        from: StationId,
        to: StationId,
        weight_km: u32,
        lines: LineSet,
    ) {
        self.adjacency[from.index()].push(Edge {
            to,
            weight_km,
            lines: lines.clone(),
        });
        self.adjacency[to.index()].push(Edge {
            to: from,
            weight_km,
            lines,
        });
        self.edge_count += 1;
    }

    /// Lines serving the named station.
    pub fn lines_of(&self, name: &str) -> Result<&LineSet, NetworkError> {
        let id = self.require(name)?;
        Ok(&self.stations[id.index()].lines)
    }

    /// Lines serving both stations, in the first station's order.
    pub fn common_lines(&self, a: &str, b: &str) -> Result<LineSet, NetworkError> {
        let lines_a = self.lines_of(a)?;
        let lines_b = self.lines_of(b)?;
        Ok(lines_a.intersection(lines_b))
    }

    /// Adjacent stations with their hop weight and lines.
    ///
    /// Unknown names have no neighbours.
    pub fn neighbours(&self, name: &str) -> Vec<Neighbour<'_>> {
        let Some(id) = self.station_id(name) else {
            return Vec::new();
        };
        self.edges_from(id)
            .iter()
            .map(|edge| Neighbour {
                name: self.name(edge.to),
                weight_km: edge.weight_km,
                lines: &edge.lines,
            })
            .collect()
    }

    /// Outgoing half-edges of a station, in insertion order.
    pub fn edges_from(&self, id: StationId) -> &[Edge] {
        &self.adjacency[id.index()]
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.index.get(name).copied()
    }

    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    pub fn name(&self, id: StationId) -> &str {
        &self.stations[id.index()].name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All stations in registration order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i as u32), s))
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of undirected edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn require(&self, name: &str) -> Result<StationId, NetworkError> {
        self.station_id(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }
}
