//! Provider seam for the trip planner.
//!
//! Everything the planner needs from a mapping backend goes through
//! `MapsProvider`. The HTTP adapter implements it for the real service;
//! tests implement it with scripted doubles.

use crate::error::ProviderError;

/// Geographic coordinate as (latitude, longitude) degrees.
pub type Coord = (f64, f64);

/// External mapping backend: geocoding, directions, and place search.
///
/// Implementations must be shareable across the search fan-out, hence
/// the `Send + Sync` bound. Every method maps one remote call; failures
/// are reported, never swallowed, so each call site can pick its own
/// fallback.
pub trait MapsProvider: Send + Sync {
    /// Resolves a free-form place name to candidate locations.
    ///
    /// An empty vector is a valid answer (the provider knows nothing by
    /// that name) and is distinct from a failed call.
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>, ProviderError>;

    /// Requests a driving route between two coordinates.
    fn directions(
        &self,
        origin: Coord,
        destination: Coord,
        avoid_highways: bool,
    ) -> Result<DirectionsRoute, ProviderError>;

    /// Searches for places of one category around a point.
    ///
    /// `radius_meters` is the provider-native unit.
    fn nearby_search(
        &self,
        center: Coord,
        radius_meters: f64,
        category: &str,
    ) -> Result<Vec<NearbyHit>, ProviderError>;

    /// Fetches the detail record for a place id.
    fn place_details(&self, provider_id: &str) -> Result<PlaceDetails, ProviderError>;
}

impl<P: MapsProvider + ?Sized> MapsProvider for &P {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>, ProviderError> {
        (**self).geocode(query)
    }

    fn directions(
        &self,
        origin: Coord,
        destination: Coord,
        avoid_highways: bool,
    ) -> Result<DirectionsRoute, ProviderError> {
        (**self).directions(origin, destination, avoid_highways)
    }

    fn nearby_search(
        &self,
        center: Coord,
        radius_meters: f64,
        category: &str,
    ) -> Result<Vec<NearbyHit>, ProviderError> {
        (**self).nearby_search(center, radius_meters, category)
    }

    fn place_details(&self, provider_id: &str) -> Result<PlaceDetails, ProviderError> {
        (**self).place_details(provider_id)
    }
}

/// One geocoding candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub coords: Coord,
    pub formatted_address: String,
}

/// A routed itinerary as returned by the provider, prior to
/// normalization into the planner's route model.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRoute {
    pub legs: Vec<RouteLeg>,
}

/// One leg of a provider route. Distances and durations are already
/// converted to miles and hours by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub steps: Vec<RouteStep>,
}

/// One step of a leg, carrying its geometry in encoded polyline form.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    pub encoded_polyline: String,
}

/// One place search result.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyHit {
    /// Provider-assigned stable id. Absent for anonymous results.
    pub provider_id: Option<String>,
    pub name: String,
    pub rating: Option<f64>,
    /// Short human-readable locality line, if the provider sent one.
    pub vicinity: Option<String>,
    pub coords: Coord,
}

/// Detail record for a single place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceDetails {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// One line per weekday, in the provider's display format.
    pub hours: Vec<String>,
    pub rating: Option<f64>,
    pub reviews: Vec<PlaceReview>,
}

/// A single user review attached to a place detail record.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceReview {
    pub author: String,
    pub rating: Option<f64>,
    pub text: String,
}
