//! Fetches the full stop-time listing for the configured agency.

use anyhow::Result;
use reqwest::StatusCode;
use tracing::warn;

use crate::config::ApiConfig;
use crate::fetch::{self, HttpClient};
use crate::models::StopTime;

/// One authenticated GET against `/stop_times`.
///
/// A non-200 status is logged and degrades to an empty listing; transport
/// faults and unparseable bodies propagate.
pub async fn fetch_stop_times<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
) -> Result<Vec<StopTime>> {
    let url = format!("{}/stop_times", config.base_url).parse()?;
    let resp = fetch::get(client, url).await?;

    if resp.status() != StatusCode::OK {
        warn!(status = %resp.status(), "Failed to fetch stop_times");
        return Ok(Vec::new());
    }

    Ok(resp.json().await?)
}
