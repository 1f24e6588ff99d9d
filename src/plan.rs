//! Trip planning facade.
//!
//! One entry point over the resolver and the place finder. A plan is
//! built either from a custom start/end pair or from a curated scenic
//! route; either way the result is a whole `RoutePlan` the UI replaces
//! wholesale on every generation.

use serde::{Deserialize, Serialize};

use crate::categories::SCENIC_DEFAULTS;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::map::{self, MapDescription};
use crate::places::PlaceFinder;
use crate::resolver::RouteResolver;
use crate::route::RoutePlan;
use crate::scenic::ScenicRoute;
use crate::traits::MapsProvider;

/// A custom trip between two named places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub start: String,
    pub end: String,
    pub avoid_highways: bool,
    /// `None` skips place discovery entirely.
    pub discover: Option<DiscoveryOptions>,
}

/// What to look for along the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryOptions {
    pub categories: Vec<String>,
    pub radius_km: f64,
}

impl Default for DiscoveryOptions {
    /// The curated-route defaults: the scenic category set at 30 km.
    fn default() -> Self {
        Self {
            categories: SCENIC_DEFAULTS.iter().map(|s| s.to_string()).collect(),
            radius_km: 30.0,
        }
    }
}

/// Builds route plans from user input and the configured provider.
#[derive(Debug)]
pub struct TripPlanner<P> {
    provider: Option<P>,
    config: PlannerConfig,
}

impl<P: MapsProvider> TripPlanner<P> {
    /// `provider: None` runs every plan in fallback mode: gazetteer
    /// geocoding, chord routes, and no discovered places.
    pub fn new(provider: Option<P>, config: PlannerConfig) -> Self {
        Self { provider, config }
    }

    fn resolver(&self) -> RouteResolver<&P> {
        RouteResolver::new(self.provider.as_ref())
    }

    fn finder(&self) -> PlaceFinder<&P> {
        PlaceFinder::new(self.provider.as_ref()).with_max_places(self.config.max_places)
    }

    /// Plans a custom trip between two named places.
    pub fn plan_trip(&self, request: &TripRequest) -> Result<RoutePlan, PlanError> {
        let resolver = self.resolver();
        let start = resolver.geocode(&request.start)?;
        let end = resolver.geocode(&request.end)?;
        let route = resolver.route_between(start, end, request.avoid_highways);

        let places = match &request.discover {
            Some(options) => {
                self.finder()
                    .discover(start, end, &options.categories, options.radius_km)
            }
            None => Vec::new(),
        };

        Ok(RoutePlan {
            label: format!("{} to {}", request.start, request.end),
            route,
            start_name: request.start.clone(),
            end_name: request.end.clone(),
            start,
            end,
            waypoints: Vec::new(),
            places,
        })
    }

    /// Plans a curated scenic route, anchored on its first and last
    /// stops. Highways are avoided, that being the point of a scenic
    /// drive. The chord fallback ignores the intermediate waypoints;
    /// they still ride along in the plan for display.
    pub fn plan_scenic(
        &self,
        scenic: &ScenicRoute,
        discover: Option<DiscoveryOptions>,
    ) -> Result<RoutePlan, PlanError> {
        let (first, last) = match (scenic.waypoints.first(), scenic.waypoints.last()) {
            (Some(first), Some(last)) if scenic.waypoints.len() >= 2 => (first, last),
            _ => return Err(PlanError::TooFewStops(scenic.name.clone())),
        };

        let route = self.resolver().route_between(first.coords, last.coords, true);

        let places = match discover {
            Some(options) => self.finder().discover(
                first.coords,
                last.coords,
                &options.categories,
                options.radius_km,
            ),
            None => Vec::new(),
        };

        Ok(RoutePlan {
            label: scenic.name.clone(),
            route,
            start_name: first.name.clone(),
            end_name: last.name.clone(),
            start: first.coords,
            end: last.coords,
            waypoints: scenic.waypoints.clone(),
            places,
        })
    }

    /// Renders a plan into a map description at the configured zoom.
    pub fn assemble_map(&self, plan: &RoutePlan) -> MapDescription {
        map::assemble(
            &plan.route,
            plan.start,
            plan.end,
            &plan.waypoints,
            &plan.places,
            self.config.default_zoom,
        )
    }
}
