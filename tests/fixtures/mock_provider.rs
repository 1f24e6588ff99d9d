//! Scripted `MapsProvider` double with a call log.
//!
//! Built with a fluent builder: script geocode answers per name,
//! one directions response, nearby results per category, and detail
//! records per place id. Anything not scripted behaves like a provider
//! that knows nothing (empty results / status errors), and every call
//! is recorded for assertion.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use scenic_planner::error::ProviderError;
use scenic_planner::traits::{
    Coord, DirectionsRoute, GeocodeHit, MapsProvider, NearbyHit, PlaceDetails,
};

/// One recorded provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    Geocode(String),
    Directions {
        origin: Coord,
        destination: Coord,
        avoid_highways: bool,
    },
    NearbySearch {
        center: Coord,
        radius_meters: f64,
        category: String,
    },
    PlaceDetails(String),
}

#[derive(Debug, Default)]
pub struct MockProvider {
    geocode_hits: HashMap<String, Vec<GeocodeHit>>,
    geocode_failures: HashSet<String>,
    directions: Option<DirectionsRoute>,
    directions_fail: bool,
    nearby: HashMap<String, Vec<NearbyHit>>,
    nearby_failures: HashSet<String>,
    details: HashMap<String, PlaceDetails>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a single geocode hit for a name.
    pub fn with_geocode(mut self, name: &str, coords: Coord) -> Self {
        self.geocode_hits.insert(
            name.to_string(),
            vec![GeocodeHit {
                coords,
                formatted_address: name.to_string(),
            }],
        );
        self
    }

    /// Makes geocode for one name fail with a status error.
    pub fn with_geocode_failure(mut self, name: &str) -> Self {
        self.geocode_failures.insert(name.to_string());
        self
    }

    pub fn with_directions(mut self, route: DirectionsRoute) -> Self {
        self.directions = Some(route);
        self
    }

    /// Makes every directions call fail with a status error.
    pub fn with_directions_failure(mut self) -> Self {
        self.directions_fail = true;
        self
    }

    /// Scripts nearby-search results for one category, returned at
    /// every sample point.
    pub fn with_nearby(mut self, category: &str, hits: Vec<NearbyHit>) -> Self {
        self.nearby.insert(category.to_string(), hits);
        self
    }

    /// Makes nearby search for one category fail with a status error.
    pub fn with_nearby_failure(mut self, category: &str) -> Self {
        self.nearby_failures.insert(category.to_string());
        self
    }

    pub fn with_details(mut self, provider_id: &str, details: PlaceDetails) -> Self {
        self.details.insert(provider_id.to_string(), details);
        self
    }

    /// Snapshot of every call made so far.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: ProviderCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn status_error() -> ProviderError {
        ProviderError::Status {
            status: "UNKNOWN_ERROR".to_string(),
        }
    }
}

/// Convenience constructor for scripted nearby hits.
pub fn nearby_hit(id: Option<&str>, name: &str, rating: Option<f64>, coords: Coord) -> NearbyHit {
    NearbyHit {
        provider_id: id.map(str::to_string),
        name: name.to_string(),
        rating,
        vicinity: Some(format!("{} St", name)),
        coords,
    }
}

impl MapsProvider for MockProvider {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>, ProviderError> {
        self.record(ProviderCall::Geocode(query.to_string()));
        if self.geocode_failures.contains(query) {
            return Err(Self::status_error());
        }
        Ok(self.geocode_hits.get(query).cloned().unwrap_or_default())
    }

    fn directions(
        &self,
        origin: Coord,
        destination: Coord,
        avoid_highways: bool,
    ) -> Result<DirectionsRoute, ProviderError> {
        self.record(ProviderCall::Directions {
            origin,
            destination,
            avoid_highways,
        });
        if self.directions_fail {
            return Err(Self::status_error());
        }
        self.directions.clone().ok_or_else(Self::status_error)
    }

    fn nearby_search(
        &self,
        center: Coord,
        radius_meters: f64,
        category: &str,
    ) -> Result<Vec<NearbyHit>, ProviderError> {
        self.record(ProviderCall::NearbySearch {
            center,
            radius_meters,
            category: category.to_string(),
        });
        if self.nearby_failures.contains(category) {
            return Err(Self::status_error());
        }
        Ok(self.nearby.get(category).cloned().unwrap_or_default())
    }

    fn place_details(&self, provider_id: &str) -> Result<PlaceDetails, ProviderError> {
        self.record(ProviderCall::PlaceDetails(provider_id.to_string()));
        self.details
            .get(provider_id)
            .cloned()
            .ok_or_else(Self::status_error)
    }
}
