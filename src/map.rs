//! Map description assembly.
//!
//! Turns a plan's parts into a renderable description: center, zoom,
//! markers, and the route polyline. The rendering widget itself lives
//! in the host application. Assembly never fails; entries with bad
//! coordinates are skipped and a world-view center stands in when
//! nothing valid remains to center on.

use serde::{Deserialize, Serialize};

use crate::places::Place;
use crate::polyline::Polyline;
use crate::route::{Route, Waypoint};
use crate::traits::Coord;

/// Center used when no anchor coordinate is valid.
const WORLD_VIEW_CENTER: Coord = (40.0, -100.0);

/// What a marker on the map stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarkerKind {
    Start,
    End,
    Waypoint,
    Place { category: String },
}

/// One pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub coords: Coord,
    pub label: String,
    pub kind: MarkerKind,
}

/// Everything the rendering widget needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDescription {
    pub center: Coord,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub polyline: Polyline,
}

/// Composes the renderable map for a resolved route.
///
/// The center is the arithmetic mean of the valid coordinates among
/// start, end, and waypoints; discovered places do not pull the view.
pub fn assemble(
    route: &Route,
    start: Coord,
    end: Coord,
    waypoints: &[Waypoint],
    places: &[Place],
    zoom: u8,
) -> MapDescription {
    let mut anchors = vec![start, end];
    anchors.extend(waypoints.iter().map(|wp| wp.coords));

    let valid: Vec<Coord> = anchors.into_iter().filter(|c| is_valid(*c)).collect();
    let center = if valid.is_empty() {
        WORLD_VIEW_CENTER
    } else {
        let count = valid.len() as f64;
        (
            valid.iter().map(|c| c.0).sum::<f64>() / count,
            valid.iter().map(|c| c.1).sum::<f64>() / count,
        )
    };

    let mut markers = Vec::new();
    if is_valid(start) {
        markers.push(Marker {
            coords: start,
            label: "Start".to_string(),
            kind: MarkerKind::Start,
        });
    }
    if is_valid(end) {
        markers.push(Marker {
            coords: end,
            label: "End".to_string(),
            kind: MarkerKind::End,
        });
    }
    for waypoint in waypoints {
        if is_valid(waypoint.coords) {
            markers.push(Marker {
                coords: waypoint.coords,
                label: waypoint.name.clone(),
                kind: MarkerKind::Waypoint,
            });
        }
    }
    for place in places {
        if is_valid(place.coords) {
            markers.push(Marker {
                coords: place.coords,
                label: place.name.clone(),
                kind: MarkerKind::Place {
                    category: place.category.clone(),
                },
            });
        }
    }

    MapDescription {
        center,
        zoom,
        markers,
        polyline: route.polyline.clone(),
    }
}

fn is_valid(coords: Coord) -> bool {
    coords.0.is_finite()
        && coords.1.is_finite()
        && (-90.0..=90.0).contains(&coords.0)
        && (-180.0..=180.0).contains(&coords.1)
}
