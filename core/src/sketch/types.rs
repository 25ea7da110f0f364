use crate::geometry::{Point, Segment};
use serde::{Deserialize, Serialize};

/// The stroke currently being drawn.
///
/// When `is_drawing` is false the endpoints are leftovers from the last
/// stroke and are not meant to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSegment {
    pub start: Point,
    pub end: Point,
    pub is_drawing: bool,
}

/// Marker for the endpoint the cursor is currently attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapIndicator {
    pub is_snapping: bool,
    /// Only meaningful while `is_snapping` is set
    pub snap_point: Point,
}

/// Everything a renderer needs to paint one frame of a sketch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchSnapshot {
    pub segments: Vec<Segment>,
    pub preview: PreviewSegment,
    pub snap: SnapIndicator,
}
