//! Fetches the route geometry for a single trip.

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use crate::config::ApiConfig;
use crate::fetch::{self, HttpClient};
use crate::models::{Shape, ShapePoint};

/// The subset of each `/shapes` response object we keep. Everything else
/// is dropped on deserialization.
#[derive(Debug, Deserialize)]
struct RawShapePoint {
    shape_pt_lat: f64,
    shape_pt_lon: f64,
    shape_pt_sequence: u32,
}

/// Fetches the geometry for one trip.
///
/// Sleeps the configured delay first (a fixed self-imposed rate limit),
/// then issues one GET against `/shapes?shape_id=<trip_id>`. A non-200
/// status is logged and degrades to a shape with no points; transport
/// faults propagate.
pub async fn fetch_shape_for_trip<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    trip_id: &str,
) -> Result<Shape> {
    tokio::time::sleep(config.shape_fetch_delay).await;

    let mut url: reqwest::Url = format!("{}/shapes", config.base_url).parse()?;
    url.query_pairs_mut().append_pair("shape_id", trip_id);

    let resp = fetch::get(client, url).await?;

    if resp.status() != StatusCode::OK {
        warn!(trip_id, status = %resp.status(), "Failed to fetch shapes for trip");
        return Ok(Shape::empty(trip_id));
    }

    let raw: Vec<RawShapePoint> = resp.json().await?;
    Ok(Shape {
        shape_id: trip_id.to_string(),
        points: points_for_trip(trip_id, raw),
    })
}

/// Tags each raw point with the trip id it was requested for, preserving
/// response order. The response's own `shape_id` field, if present, is
/// ignored in favor of the requested trip id.
fn points_for_trip(trip_id: &str, raw: Vec<RawShapePoint>) -> Vec<ShapePoint> {
    raw.into_iter()
        .map(|p| ShapePoint {
            shape_id: trip_id.to_string(),
            shape_pt_lat: p.shape_pt_lat,
            shape_pt_lon: p.shape_pt_lon,
            shape_pt_sequence: p.shape_pt_sequence,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_carry_requested_trip_id() {
        let raw = vec![
            RawShapePoint {
                shape_pt_lat: 46.77,
                shape_pt_lon: 23.59,
                shape_pt_sequence: 0,
            },
            RawShapePoint {
                shape_pt_lat: 46.78,
                shape_pt_lon: 23.60,
                shape_pt_sequence: 1,
            },
        ];

        let points = points_for_trip("17_0", raw);

        assert_eq!(points.len(), 2);
        for p in &points {
            assert_eq!(p.shape_id, "17_0");
        }
        assert_eq!(points[0].shape_pt_lat, 46.77);
        assert_eq!(points[0].shape_pt_lon, 23.59);
        assert_eq!(points[0].shape_pt_sequence, 0);
        assert_eq!(points[1].shape_pt_sequence, 1);
    }

    #[test]
    fn test_response_order_is_preserved() {
        // The source may return out-of-order sequences; we do not re-sort.
        let raw = vec![
            RawShapePoint {
                shape_pt_lat: 1.0,
                shape_pt_lon: 1.0,
                shape_pt_sequence: 5,
            },
            RawShapePoint {
                shape_pt_lat: 2.0,
                shape_pt_lon: 2.0,
                shape_pt_sequence: 3,
            },
        ];

        let points = points_for_trip("x", raw);
        assert_eq!(points[0].shape_pt_sequence, 5);
        assert_eq!(points[1].shape_pt_sequence, 3);
    }

    #[test]
    fn test_empty_response_yields_no_points() {
        assert!(points_for_trip("x", vec![]).is_empty());
    }
}
