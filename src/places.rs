//! Place discovery along a route corridor.
//!
//! The finder samples evenly spaced points on the straight line between
//! the route endpoints and queries the provider at each point for each
//! requested category. The straight-line corridor is a deliberate
//! approximation: it ignores the actual route geometry. Failed queries
//! contribute nothing; results are deduplicated by provider id and
//! capped.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::DEFAULT_MAX_PLACES;
use crate::traits::{Coord, MapsProvider, NearbyHit, PlaceDetails};

/// Number of corridor sample points, endpoints included.
const SAMPLE_POINTS: usize = 5;

/// Address line shown when the provider sends no vicinity.
const NO_ADDRESS: &str = "Address not available";

/// A discovered point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Provider-assigned id; dedup identity. `None` is exempt from
    /// deduplication and never merged.
    pub provider_id: Option<String>,
    pub name: String,
    /// `None` renders as unrated.
    pub rating: Option<f64>,
    pub address: String,
    pub coords: Coord,
    /// Category key the place was discovered under.
    pub category: String,
}

/// Discovers places along a route via the mapping provider.
#[derive(Debug)]
pub struct PlaceFinder<P> {
    provider: Option<P>,
    max_places: usize,
}

impl<P: MapsProvider> PlaceFinder<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            max_places: DEFAULT_MAX_PLACES,
        }
    }

    pub fn with_max_places(mut self, max_places: usize) -> Self {
        self.max_places = max_places;
        self
    }

    /// Searches for places of the requested categories along the
    /// corridor between `start` and `end`.
    ///
    /// Queries are independent; each failure is logged and yields
    /// nothing. Without a provider there is no places source at all,
    /// so the result is empty.
    pub fn discover(
        &self,
        start: Coord,
        end: Coord,
        categories: &[String],
        radius_km: f64,
    ) -> Vec<Place> {
        let Some(provider) = &self.provider else {
            return Vec::new();
        };

        let radius_meters = radius_km * 1000.0;
        let queries: Vec<(Coord, &String)> = sample_points(start, end)
            .into_iter()
            .flat_map(|point| categories.iter().map(move |category| (point, category)))
            .collect();

        // Independent lookups; the indexed collect keeps results in
        // query order, so the output matches a sequential run.
        let batches: Vec<Vec<Place>> = queries
            .par_iter()
            .map(|&(point, category)| {
                match provider.nearby_search(point, radius_meters, category) {
                    Ok(hits) => hits
                        .into_iter()
                        .map(|hit| to_place(hit, category))
                        .collect(),
                    Err(err) => {
                        warn!(category = %category, error = %err, "place search failed, skipping");
                        Vec::new()
                    }
                }
            })
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut places = Vec::new();
        for place in batches.into_iter().flatten() {
            match &place.provider_id {
                Some(id) => {
                    if seen.insert(id.clone()) {
                        places.push(place);
                    }
                }
                None => places.push(place),
            }
        }

        places.truncate(self.max_places);
        places
    }

    /// Fetches the detail record for a place, if the provider can.
    ///
    /// Soft-failing by design: any provider error, or no provider,
    /// yields `None`.
    pub fn place_details(&self, provider_id: &str) -> Option<PlaceDetails> {
        let provider = self.provider.as_ref()?;
        match provider.place_details(provider_id) {
            Ok(details) => Some(details),
            Err(err) => {
                warn!(provider_id, error = %err, "place details lookup failed");
                None
            }
        }
    }
}

/// Evenly spaced points on the straight segment from `start` to `end`,
/// both endpoints included.
fn sample_points(start: Coord, end: Coord) -> Vec<Coord> {
    (0..SAMPLE_POINTS)
        .map(|i| {
            let t = i as f64 / (SAMPLE_POINTS - 1) as f64;
            (
                start.0 + (end.0 - start.0) * t,
                start.1 + (end.1 - start.1) * t,
            )
        })
        .collect()
}

fn to_place(hit: NearbyHit, category: &str) -> Place {
    Place {
        provider_id: hit.provider_id,
        name: hit.name,
        rating: hit.rating,
        address: hit.vicinity.unwrap_or_else(|| NO_ADDRESS.to_string()),
        coords: hit.coords,
        category: category.to_string(),
    }
}

/// Groups places by category, preserving first-seen category order.
/// Within a group, places sort by rating descending with unrated last.
pub fn group_by_category(places: &[Place]) -> Vec<(String, Vec<Place>)> {
    let mut groups: Vec<(String, Vec<Place>)> = Vec::new();
    for place in places {
        match groups.iter_mut().find(|(key, _)| *key == place.category) {
            Some((_, members)) => members.push(place.clone()),
            None => groups.push((place.category.clone(), vec![place.clone()])),
        }
    }
    for (_, members) in &mut groups {
        members.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    groups
}
