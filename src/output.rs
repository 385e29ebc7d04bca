//! Filtering and persistence of collected shapes.

use anyhow::Result;
use tracing::info;

use crate::models::Shape;
use std::fs;
use std::path::Path;

/// Writes the collected shapes to `path` as a pretty-printed JSON array,
/// replacing any existing file.
///
/// Shapes with no points (failed fetches) are dropped first; the kept-shape
/// and total-point counts are logged for the run summary.
pub fn write_shapes(path: &Path, shapes: &[Shape]) -> Result<()> {
    let kept: Vec<&Shape> = shapes.iter().filter(|s| !s.points.is_empty()).collect();
    let total_points: usize = kept.iter().map(|s| s.points.len()).sum();

    info!(
        shapes = kept.len(),
        points = total_points,
        "Total shapes collected"
    );

    fs::write(path, serde_json::to_string_pretty(&kept)?)?;
    info!(path = %path.display(), "Done");

    Ok(())
}
