use crate::geometry::utils_2d::distance_point_to_segment;
use crate::geometry::{Point, Segment};

/// Index of the first segment passing within `threshold` of `query`.
///
/// Segments are scanned in store order and the first match is returned, not
/// the closest one. Zero-length segments are never hit.
pub fn find_nearest_segment(query: Point, segments: &[Segment], threshold: f64) -> Option<usize> {
    segments.iter().position(|s| {
        distance_point_to_segment(query, s).is_some_and(|d| d <= threshold)
    })
}
