//! Run configuration for the fetch pipeline.
//!
//! All knobs live in one [`ApiConfig`] value that is built once at startup
//! and passed into the fetch functions, rather than read from process-wide
//! globals.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.tranzy.ai/v1/opendata";
pub const DEFAULT_AGENCY_ID: &str = "2";

/// Settings for one run of the pipeline. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root of the opendata API; endpoint paths are appended to this.
    pub base_url: String,
    /// Agency selector sent as the `X-Agency-Id` header.
    pub agency_id: String,
    /// Credential sent as the `X-API-KEY` header.
    pub api_key: String,
    /// Pause before each shape request. A crude self-imposed rate limit,
    /// not adaptive.
    pub shape_fetch_delay: Duration,
    /// Number of concurrent shape fetches.
    pub workers: usize,
}

impl ApiConfig {
    /// Builds a config from the process environment, falling back to
    /// defaults for everything but the API key.
    ///
    /// A missing `API_KEY` yields an empty credential; the remote API
    /// answers such requests with a non-200 status and the run degrades
    /// to an empty result.
    pub fn from_env() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            agency_id: std::env::var("AGENCY_ID")
                .unwrap_or_else(|_| DEFAULT_AGENCY_ID.to_string()),
            api_key: std::env::var("API_KEY").unwrap_or_default(),
            shape_fetch_delay: Duration::from_millis(500),
            workers: 2,
        }
    }
}
