//! The four-stage pipeline: fetch stop times, derive the trip set, fan out
//! shape fetches over a bounded worker pool, then filter and write.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::ApiConfig;
use crate::fetch::HttpClient;
use crate::models::{Shape, StopTime};
use crate::output::write_shapes;
use crate::shapes::fetch_shape_for_trip;
use crate::stop_times::fetch_stop_times;

/// Deduplicates trip identifiers from a stop-time listing.
///
/// Iteration order carries no meaning, but an ordered set keeps the fan-out
/// deterministic, so two runs against an unchanged dataset write identical
/// files.
pub fn unique_trip_ids(stop_times: &[StopTime]) -> BTreeSet<String> {
    stop_times.iter().map(|st| st.trip_id.clone()).collect()
}

/// Fans one shape fetch per trip id out over `config.workers` concurrent
/// tasks and collects results in submission order.
///
/// A failed fetch (non-200) yields an empty-points shape and never aborts
/// the batch; transport faults and task panics propagate.
pub async fn fetch_all_shapes<C>(
    client: Arc<C>,
    config: &ApiConfig,
    trip_ids: BTreeSet<String>,
) -> Result<Vec<Shape>>
where
    C: HttpClient + 'static,
{
    let semaphore = Arc::new(Semaphore::new(config.workers));
    let mut tasks = Vec::with_capacity(trip_ids.len());

    for trip_id in trip_ids {
        let sem = semaphore.clone();
        let client = client.clone();
        let config = config.clone();

        tasks.push(tokio::spawn(async move {
            let _permit = sem.acquire().await?;
            fetch_shape_for_trip(client.as_ref(), &config, &trip_id).await
        }));
    }

    let mut shapes = Vec::with_capacity(tasks.len());
    for task in tasks {
        let shape: Shape = task.await??;
        info!(
            trip_id = %shape.shape_id,
            points = shape.points.len(),
            "Shape fetched"
        );
        shapes.push(shape);
    }

    Ok(shapes)
}

/// Runs the whole batch once and writes the result to `output`.
pub async fn run<C>(client: Arc<C>, config: &ApiConfig, output: &Path) -> Result<()>
where
    C: HttpClient + 'static,
{
    info!("Fetching stop_times");
    let stop_times = fetch_stop_times(client.as_ref(), config).await?;
    info!(count = stop_times.len(), "Stop times fetched");

    let trip_ids = unique_trip_ids(&stop_times);
    info!(count = trip_ids.len(), "Unique trip ids found");

    info!(workers = config.workers, "Fetching shapes");
    let shapes = fetch_all_shapes(client, config, trip_ids).await?;

    write_shapes(output, &shapes)?;

    Ok(())
}
