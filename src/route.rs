//! Route and trip-plan data model.

use serde::{Deserialize, Serialize};

use crate::links;
use crate::places::Place;
use crate::polyline::Polyline;
use crate::traits::Coord;

/// A resolved driving route between two points.
///
/// Immutable once produced. Either normalized from a provider response
/// or synthesized as a straight chord in degraded mode; the two-point
/// polyline is the tell for the latter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub polyline: Polyline,
}

/// A named stop along a curated route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub coords: Coord,
    pub description: String,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, coords: Coord, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coords,
            description: description.into(),
        }
    }
}

/// Everything one planning pass produced, ready for display.
///
/// Session-scoped: a new generation replaces the whole value, there is
/// no partial mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Display label, either "<start> to <end>" or a curated route name.
    pub label: String,
    pub route: Route,
    pub start_name: String,
    pub end_name: String,
    pub start: Coord,
    pub end: Coord,
    pub waypoints: Vec<Waypoint>,
    pub places: Vec<Place>,
}

impl RoutePlan {
    /// Summary numbers for the stats row.
    pub fn stats(&self) -> PlanStats {
        PlanStats {
            distance_miles: self.route.distance_miles,
            duration_hours: self.route.duration_hours,
            stop_count: self.waypoints.len() + 2,
            place_count: self.places.len(),
        }
    }

    /// Deep link opening this trip in the external maps site.
    pub fn maps_url(&self) -> String {
        links::directions_url(&self.start_name, &self.end_name)
    }
}

/// Derived metrics for a plan. `stop_count` counts start and end plus
/// every waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanStats {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub stop_count: usize,
    pub place_count: usize,
}
