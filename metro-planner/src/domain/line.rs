//! Metro line types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line name: {reason}")]
pub struct InvalidLine {
    reason: &'static str,
}

/// The name of a metro line, e.g. "Yellow Line".
///
/// Lines are not entities in their own right; a line exists because some
/// station or edge is tagged with it. The name is trimmed and never blank.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::Line;
///
/// let yellow = Line::parse("  Yellow Line ").unwrap();
/// assert_eq!(yellow.as_str(), "Yellow Line");
///
/// assert!(Line::parse("").is_err());
/// assert!(Line::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Line(String);

impl Line {
    /// Parse a line name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLine> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLine {
                reason: "must not be blank",
            });
        }
        Ok(Line(trimmed.to_string()))
    }

    /// Returns the line name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Line {
    type Error = InvalidLine;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Line::parse(&value)
    }
}

impl From<Line> for String {
    fn from(line: Line) -> Self {
        line.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of lines that remembers the order in which lines were first added.
///
/// Insertion order is the stable ordering used whenever "the first line" of a
/// station or of an intersection is needed. Station line-sets are tiny (one to
/// three entries), so a vector with linear membership checks is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Line>", into = "Vec<Line>")]
pub struct LineSet {
    lines: Vec<Line>,
}

impl LineSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line. Returns `false` if it was already present.
    pub fn insert(&mut self, line: Line) -> bool {
        if self.contains(&line) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Returns true if the set contains `line`.
    pub fn contains(&self, line: &Line) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Add every line of `other` not already present, keeping `self`'s order first.
    pub fn union_with(&mut self, other: &LineSet) {
        for line in &other.lines {
            self.insert(line.clone());
        }
    }

    /// Lines present in both sets, in `self`'s order.
    pub fn intersection(&self, other: &LineSet) -> LineSet {
        self.lines
            .iter()
            .filter(|l| other.contains(l))
            .cloned()
            .collect()
    }

    /// The first line in insertion order.
    pub fn first(&self) -> Option<&Line> {
        self.lines.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        let mut set = LineSet::new();
        for line in iter {
            set.insert(line);
        }
        set
    }
}

impl From<Vec<Line>> for LineSet {
    fn from(lines: Vec<Line>) -> Self {
        lines.into_iter().collect()
    }
}

impl From<LineSet> for Vec<Line> {
    fn from(set: LineSet) -> Self {
        set.lines
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
