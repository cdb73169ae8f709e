//! Console rendering of itineraries.

use std::fmt;

use super::{Itinerary, SegmentAnnotation};

impl Itinerary {
    /// The path line: stations joined by arrows, each tagged with its line or
    /// a change marker.
    pub fn route_line(&self) -> String {
        let mut out = String::new();
        for (i, (station, annotation)) in self.path.iter().zip(&self.annotations).enumerate() {
            if i > 0 {
                out.push_str(" -> ");
            }
            out.push_str(station);
            match annotation {
                SegmentAnnotation::TraverseOn(line) => {
                    out.push_str(&format!(" ({line})"));
                }
                SegmentAnnotation::ChangeTo(line) => {
                    out.push_str(&format!(" [Change to {line}]"));
                }
            }
        }
        out
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Shortest path from {} to {}:",
            self.source(),
            self.destination()
        )?;
        writeln!(f, "{}", self.route_line())?;
        writeln!(f, "Total distance: {} km", self.distance_km)?;
        write!(f, "Fare: Rs. {}", self.fare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;

    fn line(s: &str) -> Line {
        Line::parse(s).unwrap()
    }

    #[test]
    fn renders_change_markers() {
        let itinerary = Itinerary {
            path: vec![
                "Shastri Park".into(),
                "Kashmere Gate".into(),
                "Chandni Chowk".into(),
            ],
            distance_km: 3,
            fare: 20,
            annotations: vec![
                SegmentAnnotation::TraverseOn(line("Red Line")),
                SegmentAnnotation::ChangeTo(line("Yellow Line")),
                SegmentAnnotation::TraverseOn(line("Yellow Line")),
            ],
        };

        assert_eq!(
            itinerary.to_string(),
            "Shortest path from Shastri Park to Chandni Chowk:\n\
             Shastri Park (Red Line) -> Kashmere Gate [Change to Yellow Line] -> Chandni Chowk (Yellow Line)\n\
             Total distance: 3 km\n\
             Fare: Rs. 20"
        );
    }

    #[test]
    fn renders_single_station() {
        let itinerary = Itinerary {
            path: vec!["Samaypur Badli".into()],
            distance_km: 0,
            fare: 10,
            annotations: vec![SegmentAnnotation::TraverseOn(line("Yellow Line"))],
        };

        assert_eq!(itinerary.route_line(), "Samaypur Badli (Yellow Line)");
        let rendered = itinerary.to_string();
        assert!(rendered.ends_with("Total distance: 0 km\nFare: Rs. 10"));
    }
}
