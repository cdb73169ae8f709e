//! Great-circle distances between stations.

use crate::domain::Coordinates;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in decimal degrees.
///
/// Non-finite inputs propagate to a non-finite result.
///
/// # Examples
///
/// ```
/// use metro_planner::geo::distance_km;
///
/// let d = distance_km(28.748035, 77.134733, 28.736278, 77.124249);
/// assert!((d - 1.659).abs() < 0.001);
/// assert_eq!(distance_km(28.6, 77.2, 28.6, 77.2), 0.0);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two coordinates, in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    distance_km(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Whole kilometres between two coordinates, truncated toward zero.
///
/// This is the edge weight convention: fares are banded on integer
/// kilometres, so a 1.9 km hop weighs 1.
pub fn truncated_km(from: Coordinates, to: Coordinates) -> u32 {
    haversine_km(from, to) as u32
}
