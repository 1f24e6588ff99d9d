//! Great-circle distance and drive-time estimation.
//!
//! Used to synthesize a straight-line fallback route when the mapping
//! provider is unavailable. Ignores roads, so it always underestimates
//! real driving distance.

use crate::traits::Coord;

/// Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Average driving speed assumption for time estimation.
const ESTIMATE_SPEED_MPH: f64 = 60.0;

/// Haversine distance between two points in miles.
pub fn distance_miles(from: Coord, to: Coord) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Estimated driving time in hours for a distance in miles.
pub fn drive_hours(miles: f64) -> f64 {
    miles / ESTIMATE_SPEED_MPH
}
