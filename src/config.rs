//! Planner configuration.
//!
//! The host application fills this in (typically from its own secret
//! and settings handling) and hands it to the planner. Nothing here
//! reads the environment.

/// Per-call timeout for provider requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Cap on places kept after deduplication.
pub const DEFAULT_MAX_PLACES: usize = 20;

/// Initial zoom level for assembled maps.
pub const DEFAULT_ZOOM: u8 = 8;

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Mapping-provider API key. `None` runs the planner in
    /// fallback-only mode: gazetteer geocoding, straight-line routes,
    /// no place discovery.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub max_places: usize,
    pub default_zoom: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_places: DEFAULT_MAX_PLACES,
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

impl PlannerConfig {
    /// Config with a provider key and defaults for everything else.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}
