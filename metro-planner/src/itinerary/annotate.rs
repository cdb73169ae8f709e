//! Line annotations along a path.
//!
//! Each station of a path gets one label saying which line the traveller
//! rides when leaving it. The line is found by intersecting the line-sets of
//! the two stations of each hop rather than reading the edge itself, which
//! agrees with the edge tags for consistent data.

use serde::Serialize;

use crate::domain::{Line, LineSet};
use crate::network::{Network, NetworkError};

/// How the traveller leaves a station of the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentAnnotation {
    /// Continue (or start) on this line
    TraverseOn(Line),
    /// Change to this line at this station
    ChangeTo(Line),
}

impl SegmentAnnotation {
    pub fn line(&self) -> &Line {
        match self {
            SegmentAnnotation::TraverseOn(line) | SegmentAnnotation::ChangeTo(line) => line,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, SegmentAnnotation::ChangeTo(_))
    }
}

/// Label every station of `path`, the terminal included.
///
/// For a hop `path[i] -> path[i + 1]` with common lines `C`:
///
/// - if `C` contains the line already being ridden, stay on it;
/// - otherwise take the first line of `C`, reported as a change unless this
///   is the first hop;
/// - if `C` is empty, change at `path[i]` to the first line of `path[i + 1]`.
///
/// The terminal is labelled with the first line of its own line-set. An empty
/// path yields no annotations.
pub fn annotate<S: AsRef<str>>(
    network: &Network,
    path: &[S],
) -> Result<Vec<SegmentAnnotation>, NetworkError> {
    let mut annotations = Vec::with_capacity(path.len());
    let mut riding: Option<Line> = None;

    for hop in path.windows(2) {
        let (from, to) = (hop[0].as_ref(), hop[1].as_ref());
        let common = network.common_lines(from, to)?;

        let annotation = match pick_line(&common, riding.as_ref()) {
            Some(line) if riding.is_none() || riding.as_ref() == Some(line) => {
                SegmentAnnotation::TraverseOn(line.clone())
            }
            Some(line) => SegmentAnnotation::ChangeTo(line.clone()),
            None => SegmentAnnotation::ChangeTo(first_line(network, to)?),
        };

        riding = Some(annotation.line().clone());
        annotations.push(annotation);
    }

    if let Some(terminal) = path.last() {
        let line = first_line(network, terminal.as_ref())?;
        annotations.push(SegmentAnnotation::TraverseOn(line));
    }

    Ok(annotations)
}

/// Number of line changes in an annotation sequence.
pub fn change_count(annotations: &[SegmentAnnotation]) -> usize {
    annotations.iter().filter(|a| a.is_change()).count()
}

fn pick_line<'a>(common: &'a LineSet, riding: Option<&Line>) -> Option<&'a Line> {
    riding
        .and_then(|current| common.iter().find(|l| *l == current))
        .or_else(|| common.first())
}

fn first_line(network: &Network, station: &str) -> Result<Line, NetworkError> {
    network
        .lines_of(station)?
        .first()
        .cloned()
        .ok_or_else(|| NetworkError::NoServingLine(station.to_string()))
}
