//! Deep links into the external maps site.
//!
//! Pure string assembly. These open the user's browser on the
//! provider's own UI, so they work regardless of whether an API key is
//! configured.

use crate::traits::Coord;

/// Directions link from one named place to another.
pub fn directions_url(start_name: &str, end_name: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/{}/{}",
        urlencoding::encode(start_name),
        urlencoding::encode(end_name)
    )
}

/// Link to a point of interest by coordinate.
pub fn place_url(coords: Coord) -> String {
    format!(
        "https://www.google.com/maps/place/?q={},{}",
        coords.0, coords.1
    )
}
