//! Test fixtures for scenic-planner.
//!
//! Provides a scripted, call-recording `MapsProvider` double so tests
//! can drive the planner without the real mapping service.

pub mod mock_provider;

pub use mock_provider::*;
