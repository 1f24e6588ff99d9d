//! Built-in gazetteer used when the mapping provider is absent or a
//! geocode call fails.
//!
//! A small fixed table of common North American place names. Lookups
//! are case-insensitive and ignore surrounding whitespace. This is the
//! last resort; anything not listed here resolves to nothing.

use crate::traits::Coord;

/// Known place names with their coordinates. Keys are stored
/// pre-normalized (lowercase, trimmed) and include common aliases.
const KNOWN_LOCATIONS: &[(&str, f64, f64)] = &[
    ("new york, ny", 40.7128, -74.0060),
    ("new york city", 40.7128, -74.0060),
    ("nyc", 40.7128, -74.0060),
    ("boston, ma", 42.3601, -71.0589),
    ("boston", 42.3601, -71.0589),
    ("los angeles, ca", 34.0522, -118.2437),
    ("chicago, il", 41.8781, -87.6298),
    ("houston, tx", 29.7604, -95.3698),
    ("philadelphia, pa", 39.9526, -75.1652),
    ("san diego, ca", 32.7157, -117.1611),
    ("san francisco, ca", 37.7749, -122.4194),
    ("seattle, wa", 47.6062, -122.3321),
    ("denver, co", 39.7392, -104.9903),
    ("washington, dc", 38.9072, -77.0369),
    ("miami, fl", 25.7617, -80.1918),
    ("las vegas, nv", 36.1699, -115.1398),
    ("atlanta, ga", 33.7490, -84.3880),
    ("portland, or", 45.5152, -122.6784),
    ("nashville, tn", 36.1627, -86.7816),
    ("austin, tx", 30.2672, -97.7431),
    ("bar harbor, me", 44.3876, -68.2039),
    ("portsmouth, nh", 43.0717, -70.7625),
    ("kennebunkport, me", 43.3615, -70.4767),
    ("camden, me", 44.2098, -69.0648),
];

/// Offline place-name lookup over the built-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoDatabase;

impl GeoDatabase {
    pub fn new() -> Self {
        Self
    }

    /// Looks up a place name, normalizing case and whitespace first.
    pub fn lookup(&self, name: &str) -> Option<Coord> {
        let needle = name.trim().to_lowercase();
        KNOWN_LOCATIONS
            .iter()
            .find(|(key, _, _)| *key == needle)
            .map(|&(_, lat, lng)| (lat, lng))
    }

    /// Number of entries in the table (aliases included).
    pub fn len(&self) -> usize {
        KNOWN_LOCATIONS.len()
    }

    pub fn is_empty(&self) -> bool {
        KNOWN_LOCATIONS.is_empty()
    }
}
