//! scenic-planner core
//!
//! Route-and-places assembly for a scenic trip planner: geocode two
//! place names, fetch driving directions and nearby points of interest
//! from a mapping provider, and produce a normalized route, a
//! deduplicated place list, and a renderable map description. When no
//! provider is configured, everything degrades to the built-in
//! gazetteer and straight-line geometry instead of failing.

pub mod categories;
pub mod config;
pub mod error;
pub mod geo_db;
pub mod google;
pub mod haversine;
pub mod links;
pub mod map;
pub mod places;
pub mod plan;
pub mod polyline;
pub mod resolver;
pub mod route;
pub mod scenic;
pub mod traits;
