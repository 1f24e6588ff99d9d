//! Curated scenic route catalog.
//!
//! Static data: each route is a named sequence of described stops. The
//! planner anchors a curated plan on the first and last stop and
//! carries the rest through as waypoints.

use serde::{Deserialize, Serialize};

use crate::route::Waypoint;

/// A predefined multi-stop scenic drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenicRoute {
    pub name: String,
    pub description: String,
    pub waypoints: Vec<Waypoint>,
}

/// The built-in scenic route catalog.
pub fn scenic_routes() -> Vec<ScenicRoute> {
    vec![
        ScenicRoute {
            name: "New England Coastal".to_string(),
            description: "Historic seaports, lighthouses, and fresh lobster".to_string(),
            waypoints: vec![
                Waypoint::new(
                    "Boston, MA",
                    (42.3601, -71.0589),
                    "Historic city with rich maritime heritage",
                ),
                Waypoint::new(
                    "Portsmouth, NH",
                    (43.0717, -70.7625),
                    "Charming seaport with colonial architecture",
                ),
                Waypoint::new(
                    "Kennebunkport, ME",
                    (43.3615, -70.4767),
                    "Picturesque coastal town with lobster shacks",
                ),
                Waypoint::new(
                    "Camden, ME",
                    (44.2098, -69.0648),
                    "Beautiful harbor with sailing opportunities",
                ),
                Waypoint::new(
                    "Bar Harbor, ME",
                    (44.3876, -68.2039),
                    "Gateway to Acadia National Park",
                ),
            ],
        },
        ScenicRoute {
            name: "Pacific Coast Highway".to_string(),
            description: "Dramatic coastlines, redwood forests, and artistic communities"
                .to_string(),
            waypoints: vec![
                Waypoint::new(
                    "San Francisco, CA",
                    (37.7749, -122.4194),
                    "Iconic city with Golden Gate Bridge",
                ),
                Waypoint::new(
                    "Monterey, CA",
                    (36.6002, -121.8947),
                    "Historic fishing village and aquarium",
                ),
                Waypoint::new(
                    "Big Sur, CA",
                    (36.2704, -121.8081),
                    "Spectacular coastal cliffs and redwoods",
                ),
                Waypoint::new(
                    "Santa Barbara, CA",
                    (34.4208, -119.6982),
                    "Spanish colonial architecture and beaches",
                ),
                Waypoint::new(
                    "Los Angeles, CA",
                    (34.0522, -118.2437),
                    "Entertainment capital with diverse culture",
                ),
            ],
        },
    ]
}

/// Looks up a catalog route by its display name.
pub fn find_route(name: &str) -> Option<ScenicRoute> {
    scenic_routes().into_iter().find(|route| route.name == name)
}
