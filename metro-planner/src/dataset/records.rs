//! Serde records for the dataset document.

use serde::{Deserialize, Serialize};

/// Top-level dataset document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkRecord {
    pub name: String,
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One station registration. A name may appear more than once, e.g. once
/// per line at an interchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub lines: Vec<String>,
}

/// One undirected hop between two registered stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Pinned weight. When absent the weight is the truncated great-circle
    /// distance between the endpoints' final coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<u32>,
}
