//! End-to-end trip planning tests
//!
//! Drives the planner facade the way a UI session would: custom trips,
//! curated scenic routes, discovery, map assembly, and deep links --
//! with and without a provider.

mod fixtures;

use scenic_planner::config::PlannerConfig;
use scenic_planner::error::PlanError;
use scenic_planner::map::MarkerKind;
use scenic_planner::plan::{DiscoveryOptions, TripPlanner, TripRequest};
use scenic_planner::route::Waypoint;
use scenic_planner::scenic::{self, ScenicRoute};
use scenic_planner::traits::{DirectionsRoute, RouteLeg, RouteStep};

use fixtures::{nearby_hit, MockProvider};

const BOSTON: (f64, f64) = (42.3601, -71.0589);
const BAR_HARBOR: (f64, f64) = (44.3876, -68.2039);

fn offline_planner() -> TripPlanner<MockProvider> {
    TripPlanner::new(None, PlannerConfig::default())
}

fn coastal_request(discover: Option<DiscoveryOptions>) -> TripRequest {
    TripRequest {
        start: "Boston, MA".to_string(),
        end: "Bar Harbor, ME".to_string(),
        avoid_highways: true,
        discover,
    }
}

// ============================================================================
// Fallback mode end to end
// ============================================================================

#[test]
fn test_offline_custom_trip() {
    let planner = offline_planner();
    let plan = planner.plan_trip(&coastal_request(None)).unwrap();

    assert_eq!(plan.label, "Boston, MA to Bar Harbor, ME");
    assert_eq!(
        plan.route.polyline.points(),
        &[BOSTON, BAR_HARBOR],
        "chord endpoints come straight from the gazetteer"
    );
    // Straight-line fallback: well short of the ~280 mile drive, and
    // that gap is the documented degraded-mode behavior.
    assert!(
        plan.route.distance_miles > 195.0 && plan.route.distance_miles < 205.0,
        "expected ~200 mile chord, got {}",
        plan.route.distance_miles
    );
    assert_eq!(plan.route.duration_hours, 3.3, "200.4 miles at 60 mph, rounded");
    assert!(plan.places.is_empty());

    let stats = plan.stats();
    assert_eq!(stats.stop_count, 2, "start and end only");
    assert_eq!(stats.place_count, 0);
}

#[test]
fn test_offline_discovery_yields_no_places() {
    let planner = offline_planner();
    let plan = planner
        .plan_trip(&coastal_request(Some(DiscoveryOptions::default())))
        .unwrap();
    assert!(plan.places.is_empty(), "no provider, no places source");
}

#[test]
fn test_offline_unknown_place_fails() {
    let planner = offline_planner();
    let request = TripRequest {
        start: "Middle of Nowhere".to_string(),
        end: "Boston, MA".to_string(),
        avoid_highways: false,
        discover: None,
    };
    let err = planner.plan_trip(&request).unwrap_err();
    assert!(matches!(err, PlanError::LocationNotFound(name) if name == "Middle of Nowhere"));
}

// ============================================================================
// Curated scenic routes
// ============================================================================

#[test]
fn test_offline_scenic_plan_anchors_on_first_and_last_stop() {
    let planner = offline_planner();
    let coastal = scenic::find_route("New England Coastal").unwrap();

    let plan = planner.plan_scenic(&coastal, None).unwrap();

    assert_eq!(plan.label, "New England Coastal");
    assert_eq!(plan.start_name, "Boston, MA");
    assert_eq!(plan.end_name, "Bar Harbor, ME");
    assert_eq!(plan.start, BOSTON);
    assert_eq!(plan.end, BAR_HARBOR);
    assert_eq!(plan.waypoints.len(), 5, "every stop rides along for display");
    assert_eq!(
        plan.route.polyline.points().len(),
        2,
        "chord fallback ignores intermediate waypoints"
    );
    assert_eq!(plan.stats().stop_count, 7, "start and end plus five waypoints");
}

#[test]
fn test_scenic_plan_needs_two_stops() {
    let planner = offline_planner();
    let stub = ScenicRoute {
        name: "One Stop Wonder".to_string(),
        description: String::new(),
        waypoints: vec![Waypoint::new("Boston, MA", BOSTON, "")],
    };
    let err = planner.plan_scenic(&stub, None).unwrap_err();
    assert!(matches!(err, PlanError::TooFewStops(name) if name == "One Stop Wonder"));
}

// ============================================================================
// Provider-backed planning
// ============================================================================

#[test]
fn test_provider_trip_with_discovery() {
    let provider = MockProvider::new()
        .with_geocode("Boston, MA", BOSTON)
        .with_geocode("Bar Harbor, ME", BAR_HARBOR)
        .with_directions(DirectionsRoute {
            legs: vec![RouteLeg {
                distance_miles: 281.0,
                duration_hours: 5.2,
                steps: vec![RouteStep {
                    encoded_polyline: "_p~iF~ps|U_ulLnnqC_mqNvxq`@".to_string(),
                }],
            }],
        })
        .with_nearby(
            "restaurant",
            vec![nearby_hit(Some("r1"), "Lobster Shack", Some(4.5), (43.4, -70.5))],
        )
        .with_nearby(
            "lodging",
            vec![nearby_hit(Some("l1"), "Harbor Inn", Some(4.1), (44.2, -69.1))],
        );
    let planner = TripPlanner::new(Some(provider), PlannerConfig::with_api_key("key"));

    let options = DiscoveryOptions {
        categories: vec!["restaurant".to_string(), "lodging".to_string()],
        radius_km: 30.0,
    };
    let plan = planner.plan_trip(&coastal_request(Some(options))).unwrap();

    assert_eq!(plan.route.distance_miles, 281.0);
    assert_eq!(plan.route.polyline.points().len(), 3);
    assert_eq!(plan.places.len(), 2, "one unique place per scripted category");
    let stats = plan.stats();
    assert_eq!(stats.place_count, 2);
}

// ============================================================================
// Map assembly and deep links
// ============================================================================

#[test]
fn test_assembled_map_centers_on_midpoint() {
    let planner = offline_planner();
    let plan = planner.plan_trip(&coastal_request(None)).unwrap();

    let map = planner.assemble_map(&plan);

    let expected_center = ((BOSTON.0 + BAR_HARBOR.0) / 2.0, (BOSTON.1 + BAR_HARBOR.1) / 2.0);
    assert!((map.center.0 - expected_center.0).abs() < 1e-9);
    assert!((map.center.1 - expected_center.1).abs() < 1e-9);
    assert_eq!(map.zoom, 8, "configured default zoom");
    assert_eq!(map.markers.len(), 2);
    assert!(matches!(map.markers[0].kind, MarkerKind::Start));
    assert!(matches!(map.markers[1].kind, MarkerKind::End));
    assert_eq!(map.polyline, plan.route.polyline);
}

#[test]
fn test_scenic_map_includes_waypoint_markers() {
    let planner = offline_planner();
    let coastal = scenic::find_route("New England Coastal").unwrap();
    let plan = planner.plan_scenic(&coastal, None).unwrap();

    let map = planner.assemble_map(&plan);
    let waypoint_markers = map
        .markers
        .iter()
        .filter(|m| matches!(m.kind, MarkerKind::Waypoint))
        .count();
    assert_eq!(waypoint_markers, 5);
}

#[test]
fn test_plan_deep_link() {
    let planner = offline_planner();
    let plan = planner.plan_trip(&coastal_request(None)).unwrap();
    assert_eq!(
        plan.maps_url(),
        "https://www.google.com/maps/dir/Boston%2C%20MA/Bar%20Harbor%2C%20ME"
    );
}
