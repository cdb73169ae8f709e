//! Builds a [`Network`] from a dataset document.
//!
//! Loading runs in two passes. Every station is registered first, so that a
//! name registered several times settles on its final coordinates and the
//! union of its lines. Edge weights are then derived from those final
//! coordinates.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use super::error::DatasetError;
use super::records::{EdgeRecord, NetworkRecord, StationRecord};
use crate::domain::{Coordinates, Line, LineSet};
use crate::geo;
use crate::network::Network;

/// The bundled Delhi Metro dataset.
const DELHI_METRO_JSON: &str = include_str!("../../data/delhi_metro.json");

/// What a load did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Distinct stations in the network.
    pub stations: usize,
    /// Station records read, duplicates included.
    pub registrations: usize,
    /// Undirected edges added.
    pub edges: usize,
    /// Stations served by more than one line.
    pub interchanges: usize,
    /// Names whose coordinates changed on re-registration, in first-seen order.
    pub relocated: Vec<String>,
}

/// A loaded network together with its name and load summary.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub network: Network,
    pub summary: LoadSummary,
}

/// Load a dataset from a JSON string.
pub fn load_str(json: &str) -> Result<Dataset, DatasetError> {
    let record: NetworkRecord = serde_json::from_str(json)?;
    build(record)
}

/// Load a dataset from a JSON file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "Read dataset file");
    load_str(&json)
}

/// The Delhi Metro network bundled with the crate.
pub fn delhi_metro() -> Result<Dataset, DatasetError> {
    load_str(DELHI_METRO_JSON)
}

fn build(record: NetworkRecord) -> Result<Dataset, DatasetError> {
    let mut network = Network::new();
    let mut summary = LoadSummary {
        registrations: record.stations.len(),
        ..LoadSummary::default()
    };

    for (index, station) in record.stations.iter().enumerate() {
        register(&mut network, index, station, &mut summary.relocated)?;
    }

    for edge in &record.edges {
        connect(&mut network, edge)?;
    }

    summary.stations = network.len();
    summary.edges = network.edge_count();
    summary.interchanges = network
        .stations()
        .filter(|(_, station)| station.is_interchange())
        .count();

    debug!(
        dataset = %record.name,
        stations = summary.stations,
        registrations = summary.registrations,
        edges = summary.edges,
        interchanges = summary.interchanges,
        relocated = summary.relocated.len(),
        "Dataset loaded"
    );

    Ok(Dataset {
        name: record.name,
        network,
        summary,
    })
}

fn register(
    network: &mut Network,
    index: usize,
    record: &StationRecord,
    relocated: &mut Vec<String>,
) -> Result<(), DatasetError> {
    let name = record.name.trim();
    if name.is_empty() {
        return Err(DatasetError::BlankStationName { index });
    }

    let coordinates = Coordinates::new(record.latitude, record.longitude);
    if !coordinates.is_valid() {
        return Err(DatasetError::InvalidCoordinates {
            name: name.to_string(),
            coordinates,
        });
    }

    let lines = parse_lines(&record.lines, || format!("station {name}"))?;
    if lines.is_empty() {
        return Err(DatasetError::StationWithoutLines {
            name: name.to_string(),
        });
    }

    let moved = network
        .station_id(name)
        .is_some_and(|id| network.station(id).coordinates != coordinates);
    if moved && !relocated.iter().any(|r| r == name) {
        relocated.push(name.to_string());
    }

    network.add_station(name, coordinates, lines);
    Ok(())
}

fn connect(network: &mut Network, record: &EdgeRecord) -> Result<(), DatasetError> {
    let (from_name, to_name) = (record.from.trim(), record.to.trim());
    let endpoint = |name: &str| {
        network
            .station_id(name)
            .ok_or_else(|| DatasetError::UnknownEndpoint {
                from: from_name.to_string(),
                to: to_name.to_string(),
                missing: name.to_string(),
            })
    };
    let from = endpoint(from_name)?;
    let to = endpoint(to_name)?;

    let lines = parse_lines(&record.lines, || format!("edge {from_name} - {to_name}"))?;
    let weight_km = record.distance_km.unwrap_or_else(|| {
        geo::truncated_km(
            network.station(from).coordinates,
            network.station(to).coordinates,
        )
    });

    trace!(from = from_name, to = to_name, weight_km, "Adding edge");
    network.connect(from, to, weight_km, lines);
    Ok(())
}

fn parse_lines(names: &[String], context: impl Fn() -> String) -> Result<LineSet, DatasetError> {
    names
        .iter()
        .map(|name| {
            Line::parse(name).map_err(|source| DatasetError::InvalidLine {
                context: context(),
                source,
            })
        })
        .collect()
}
