//! Route resolution: place names to a normalized driving route.
//!
//! The resolver prefers the mapping provider and degrades per call:
//! a failed geocode falls back to the built-in gazetteer for that one
//! name, and failed or absent directions fall back to a straight-chord
//! route. Only an unresolvable place name is surfaced as an error.

use tracing::warn;

use crate::error::PlanError;
use crate::geo_db::GeoDatabase;
use crate::haversine;
use crate::polyline::Polyline;
use crate::route::Route;
use crate::traits::{Coord, DirectionsRoute, MapsProvider};

/// Resolves start/end names into a `Route`, with or without a provider.
#[derive(Debug)]
pub struct RouteResolver<P> {
    provider: Option<P>,
    geo_db: GeoDatabase,
}

impl<P: MapsProvider> RouteResolver<P> {
    /// `provider: None` puts the resolver in fallback-only mode:
    /// gazetteer geocoding and straight-chord routes.
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            geo_db: GeoDatabase::new(),
        }
    }

    /// Resolves a place name to coordinates.
    ///
    /// A reachable provider that returns zero candidates is
    /// authoritative: the name does not exist, and the gazetteer is not
    /// consulted. Only a failed call (or no provider at all) falls back
    /// to the gazetteer.
    pub fn geocode(&self, name: &str) -> Result<Coord, PlanError> {
        if let Some(provider) = &self.provider {
            match provider.geocode(name) {
                Ok(hits) => {
                    return match hits.first() {
                        Some(hit) => Ok(hit.coords),
                        None => Err(PlanError::LocationNotFound(name.to_string())),
                    };
                }
                Err(err) => {
                    warn!(name, error = %err, "geocode failed, trying gazetteer");
                }
            }
        }

        self.geo_db
            .lookup(name)
            .ok_or_else(|| PlanError::LocationNotFound(name.to_string()))
    }

    /// Produces a route between two resolved coordinates.
    ///
    /// Infallible: if the provider is absent or its directions call
    /// fails, the result is the synthesized straight chord.
    pub fn route_between(&self, start: Coord, end: Coord, avoid_highways: bool) -> Route {
        if let Some(provider) = &self.provider {
            match provider.directions(start, end, avoid_highways) {
                Ok(directions) => return normalize(directions),
                Err(err) => {
                    warn!(error = %err, "directions failed, synthesizing chord route");
                }
            }
        }

        chord_route(start, end)
    }

    /// Full resolution: geocode both names, then route between them.
    pub fn resolve(
        &self,
        start_name: &str,
        end_name: &str,
        avoid_highways: bool,
    ) -> Result<Route, PlanError> {
        let start = self.geocode(start_name)?;
        let end = self.geocode(end_name)?;
        Ok(self.route_between(start, end, avoid_highways))
    }
}

/// Sums leg totals and concatenates step geometry in traversal order.
///
/// A step whose polyline fails to decode contributes an empty segment;
/// one corrupt step never voids the rest of the route.
fn normalize(directions: DirectionsRoute) -> Route {
    let mut distance_miles = 0.0;
    let mut duration_hours = 0.0;
    let mut polyline = Polyline::new(Vec::new());

    for leg in directions.legs {
        distance_miles += leg.distance_miles;
        duration_hours += leg.duration_hours;
        for step in leg.steps {
            match Polyline::decode(&step.encoded_polyline) {
                Ok(segment) => polyline.extend(segment),
                Err(err) => {
                    warn!(error = %err, "skipping undecodable route step");
                }
            }
        }
    }

    Route {
        distance_miles,
        duration_hours,
        polyline,
    }
}

/// Straight-line degraded route: haversine distance, 60 mph estimate,
/// a two-point polyline. Ignores the avoid-highways preference since
/// there is no road network to avoid anything on.
fn chord_route(start: Coord, end: Coord) -> Route {
    let distance = haversine::distance_miles(start, end);
    Route {
        distance_miles: round1(distance),
        duration_hours: round1(haversine::drive_hours(distance)),
        polyline: Polyline::new(vec![start, end]),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
