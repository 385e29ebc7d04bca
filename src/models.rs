use serde::{Deserialize, Serialize};

/// One scheduled arrival/departure record. The endpoint returns many more
/// fields per record; only the trip identifier is consumed here, and serde
/// ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTime {
    pub trip_id: String,
}

/// A single vertex of a route geometry, tagged with the trip it was
/// fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePoint {
    pub shape_id: String,
    pub shape_pt_lat: f64,
    pub shape_pt_lon: f64,
    pub shape_pt_sequence: u32,
}

/// The full geometry collected for one trip. `shape_id` always equals the
/// trip id the points were fetched for; an empty `points` list marks a
/// failed fetch and is filtered out before writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub shape_id: String,
    pub points: Vec<ShapePoint>,
}

impl Shape {
    /// A placeholder for a trip whose fetch returned no usable data.
    pub fn empty(trip_id: &str) -> Self {
        Self {
            shape_id: trip_id.to_string(),
            points: Vec::new(),
        }
    }
}
