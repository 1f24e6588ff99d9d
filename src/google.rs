//! Google Maps HTTP adapter.
//!
//! Implements `MapsProvider` over the web-service JSON endpoints
//! (geocoding, directions, place nearby search, place details) with
//! blocking requests bounded by a single per-call timeout. Wire units
//! (meters, seconds) are converted to the planner's miles and hours
//! here, so nothing downstream knows about the provider's formats.

use serde::Deserialize;
use tracing::debug;

use crate::error::ProviderError;
use crate::traits::{
    Coord, DirectionsRoute, GeocodeHit, MapsProvider, NearbyHit, PlaceDetails, PlaceReview,
    RouteLeg, RouteStep,
};

const METERS_PER_MILE: f64 = 1609.344;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Fields requested from the place-details endpoint.
const DETAILS_FIELDS: &str =
    "name,formatted_address,formatted_phone_number,website,opening_hours,rating,reviews";

#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Region bias for geocoding queries.
    pub region: String,
}

impl GoogleMapsConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://maps.googleapis.com".to_string(),
            timeout_secs: crate::config::DEFAULT_TIMEOUT_SECS,
            region: "us".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    config: GoogleMapsConfig,
    client: reqwest::blocking::Client,
}

impl GoogleMapsClient {
    pub fn new(config: GoogleMapsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "provider request");
        let body = self
            .client
            .get(url)
            .query(query)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>())?;
        Ok(body)
    }
}

/// Checks a body-level status, treating `ZERO_RESULTS` as an empty
/// success when the endpoint allows it.
fn check_status(status: &str, zero_results_ok: bool) -> Result<(), ProviderError> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" if zero_results_ok => Ok(()),
        other => Err(ProviderError::Status {
            status: other.to_string(),
        }),
    }
}

fn format_coord(coord: Coord) -> String {
    format!("{},{}", coord.0, coord.1)
}

impl MapsProvider for GoogleMapsClient {
    fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>, ProviderError> {
        let body: GeocodeResponse = self.get(
            "/maps/api/geocode/json",
            &[("address", query), ("region", &self.config.region)],
        )?;
        check_status(&body.status, true)?;

        Ok(body
            .results
            .into_iter()
            .map(|result| GeocodeHit {
                coords: (result.geometry.location.lat, result.geometry.location.lng),
                formatted_address: result.formatted_address,
            })
            .collect())
    }

    fn directions(
        &self,
        origin: Coord,
        destination: Coord,
        avoid_highways: bool,
    ) -> Result<DirectionsRoute, ProviderError> {
        let origin = format_coord(origin);
        let destination = format_coord(destination);
        let mut query = vec![
            ("origin", origin.as_str()),
            ("destination", destination.as_str()),
            ("units", "imperial"),
        ];
        if avoid_highways {
            query.push(("avoid", "highways"));
        }

        let body: DirectionsResponse = self.get("/maps/api/directions/json", &query)?;
        // No route is a hard miss for directions; the caller synthesizes
        // its own fallback.
        check_status(&body.status, false)?;

        let route = body.routes.into_iter().next().ok_or(ProviderError::Status {
            status: "ZERO_RESULTS".to_string(),
        })?;

        Ok(DirectionsRoute {
            legs: route
                .legs
                .into_iter()
                .map(|leg| RouteLeg {
                    distance_miles: leg.distance.value / METERS_PER_MILE,
                    duration_hours: leg.duration.value / SECONDS_PER_HOUR,
                    steps: leg
                        .steps
                        .into_iter()
                        .map(|step| RouteStep {
                            encoded_polyline: step.polyline.points,
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    fn nearby_search(
        &self,
        center: Coord,
        radius_meters: f64,
        category: &str,
    ) -> Result<Vec<NearbyHit>, ProviderError> {
        let location = format_coord(center);
        let radius = radius_meters.to_string();
        let body: NearbyResponse = self.get(
            "/maps/api/place/nearbysearch/json",
            &[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", category),
            ],
        )?;
        check_status(&body.status, true)?;

        Ok(body
            .results
            .into_iter()
            .map(|result| NearbyHit {
                provider_id: result.place_id,
                name: result.name,
                rating: result.rating,
                vicinity: result.vicinity,
                coords: (result.geometry.location.lat, result.geometry.location.lng),
            })
            .collect())
    }

    fn place_details(&self, provider_id: &str) -> Result<PlaceDetails, ProviderError> {
        let body: DetailsResponse = self.get(
            "/maps/api/place/details/json",
            &[("place_id", provider_id), ("fields", DETAILS_FIELDS)],
        )?;
        check_status(&body.status, false)?;

        let result = body.result.unwrap_or_default();
        Ok(PlaceDetails {
            name: result.name.unwrap_or_default(),
            address: result.formatted_address,
            phone: result.formatted_phone_number,
            website: result.website,
            hours: result
                .opening_hours
                .map(|hours| hours.weekday_text)
                .unwrap_or_default(),
            rating: result.rating,
            reviews: result
                .reviews
                .into_iter()
                .map(|review| PlaceReview {
                    author: review.author_name,
                    rating: review.rating,
                    text: review.text,
                })
                .collect(),
        })
    }
}

// Wire shapes. Only the fields the planner reads are declared.

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<WireRoute>,
}

#[derive(Debug, Deserialize)]
struct WireRoute {
    legs: Vec<WireLeg>,
}

#[derive(Debug, Deserialize)]
struct WireLeg {
    distance: WireValue,
    duration: WireValue,
    #[serde(default)]
    steps: Vec<WireStep>,
}

#[derive(Debug, Deserialize)]
struct WireValue {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct WireStep {
    polyline: WirePolyline,
}

#[derive(Debug, Deserialize)]
struct WirePolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    results: Vec<NearbyResult>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: Option<String>,
    name: String,
    rating: Option<f64>,
    vicinity: Option<String>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<DetailsResult>,
}

#[derive(Debug, Deserialize, Default)]
struct DetailsResult {
    name: Option<String>,
    formatted_address: Option<String>,
    formatted_phone_number: Option<String>,
    website: Option<String>,
    opening_hours: Option<WireHours>,
    rating: Option<f64>,
    #[serde(default)]
    reviews: Vec<WireReview>,
}

#[derive(Debug, Deserialize)]
struct WireHours {
    #[serde(default)]
    weekday_text: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireReview {
    author_name: String,
    rating: Option<f64>,
    text: String,
}
