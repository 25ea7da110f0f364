//! Endpoint snapping for sketch strokes.
//!
//! A cursor within the snap radius of an existing endpoint is pulled onto
//! that endpoint so new strokes connect exactly. Candidates are taken in
//! store order (p1 before p2 within a segment) and the first one inside the
//! radius wins, even if a later endpoint is closer. Keeping first-hit order
//! makes snapping reproducible for a given drawing history.

use crate::config::{SketchConfig, SnapMetric};
use crate::geometry::utils_2d::{distance_point_to_point, manhattan_length};
use crate::geometry::{Point, Segment};
use serde::{Deserialize, Serialize};

/// Outcome of resolving a cursor position against existing endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapResult {
    /// The endpoint snapped to, or the query itself when nothing was close
    pub point: Point,
    /// Whether `point` is an existing endpoint
    pub is_snapping: bool,
}

impl SnapResult {
    fn raw(point: Point) -> Self {
        Self { point, is_snapping: false }
    }

    fn snapped(point: Point) -> Self {
        Self { point, is_snapping: true }
    }
}

impl SnapMetric {
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            SnapMetric::Euclidean => distance_point_to_point(a, b),
            SnapMetric::Manhattan => manhattan_length(a, b) as f64,
        }
    }
}

/// Find the first endpoint within the configured snap radius of `query`.
pub fn find_snap_point(query: Point, segments: &[Segment], config: &SketchConfig) -> SnapResult {
    let within = |p: Point| config.snap_metric.distance(query, p) <= config.snap_radius;

    segments
        .iter()
        .flat_map(Segment::endpoints)
        .find(|p| within(*p))
        .map_or_else(|| SnapResult::raw(query), |p| {
            tracing::trace!(%query, endpoint = %p, "endpoint snap");
            SnapResult::snapped(p)
        })
}
