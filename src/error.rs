//! Error types for plan generation and provider calls.
//!
//! `ProviderError` covers a single failed call to the mapping provider
//! and is always absorbed at the call site (fallback geocoding, chord
//! route synthesis, empty search results). `PlanError` is the only
//! error surfaced to callers of the planning API.

use thiserror::Error;

/// A single mapping-provider call failed.
///
/// Recoverable by design: every site that triggers one degrades to a
/// provider-free behavior instead of propagating it.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure: connection, timeout, non-2xx status,
    /// or an unparseable response body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-OK status in the response body.
    #[error("provider returned status {status}")]
    Status { status: String },
}

/// Terminal failure of a plan attempt.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Neither the provider nor the built-in gazetteer matched the name.
    #[error("could not find location \"{0}\"")]
    LocationNotFound(String),

    /// A curated route needs at least a first and a last stop to anchor
    /// the plan.
    #[error("scenic route \"{0}\" has fewer than two stops")]
    TooFewStops(String),
}
