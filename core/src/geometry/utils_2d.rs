//! 2D geometry utilities for the sketch canvas.
//!
//! Pure functions over pixel [`Point`]s and [`Segment`]s. Anything that needs
//! sub-pixel precision (projections, angles) goes through nalgebra vectors
//! and is rounded back to whole pixels at the end.

use super::{Point, Segment, Vector2};

/// Canonical stroke directions, in degrees, in the order they are tried.
pub const SNAP_ANGLES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Below this Manhattan length the stroke direction is too unstable to snap.
pub const MIN_ANGLE_SNAP_LENGTH: i64 = 2;

// =============================================================================
// Point Operations
// =============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn distance_point_to_point(a: Point, b: Point) -> f64 {
    (b.to_vector() - a.to_vector()).norm()
}

/// Sum of the absolute coordinate differences.
///
/// Widened to i64 so any pair of pixel positions fits.
#[inline]
pub fn manhattan_length(a: Point, b: Point) -> i64 {
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    dx.abs() + dy.abs()
}

/// Direction of `p - origin` in degrees, normalized to [0, 360).
pub fn angle_degrees(origin: Point, p: Point) -> f64 {
    let delta = p.to_vector() - origin.to_vector();
    let mut angle = delta.y.atan2(delta.x).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

/// Smallest separation between two directions, in degrees.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

// =============================================================================
// Segment Operations
// =============================================================================

/// Parameter t of the projection of `p` onto the line through the segment,
/// clamped to [0, 1]. `None` for a zero-length segment.
pub fn project_point_on_segment(p: Point, s: &Segment) -> Option<f64> {
    let start = s.p1.to_vector();
    let dir = s.p2.to_vector() - start;
    let len_sq = dir.norm_squared();

    if len_sq == 0.0 {
        return None;
    }

    Some(((p.to_vector() - start).dot(&dir) / len_sq).clamp(0.0, 1.0))
}

/// Distance from `p` to the closest point of the segment.
///
/// Zero-length segments have no direction to project onto and yield `None`;
/// hit testing skips them instead of treating them as point targets.
pub fn distance_point_to_segment(p: Point, s: &Segment) -> Option<f64> {
    let t = project_point_on_segment(p, s)?;
    let start = s.p1.to_vector();
    let closest = start + (s.p2.to_vector() - start) * t;
    Some((p.to_vector() - closest).norm())
}

// =============================================================================
// Angle Snapping
// =============================================================================

/// Pull `raw` onto the nearest 45° ray from `origin`.
///
/// The first direction in [`SNAP_ANGLES`] within `tolerance_deg` of the
/// stroke wins. The snapped endpoint keeps the original stroke length and is
/// rounded to whole pixels. Strokes shorter than [`MIN_ANGLE_SNAP_LENGTH`]
/// and strokes outside every tolerance band come back unchanged.
pub fn angle_snap(origin: Point, raw: Point, tolerance_deg: f64) -> Point {
    if manhattan_length(origin, raw) < MIN_ANGLE_SNAP_LENGTH {
        return raw;
    }

    let angle = angle_degrees(origin, raw);
    let Some(snapped) = SNAP_ANGLES
        .iter()
        .copied()
        .find(|candidate| angular_distance(angle, *candidate) <= tolerance_deg)
    else {
        return raw;
    };

    let length = distance_point_to_point(origin, raw);
    let radians = snapped.to_radians();
    let end = origin.to_vector() + Vector2::new(radians.cos(), radians.sin()) * length;
    Point::from_vector(end)
}

// =============================================================================
// Tests
// =============================================================================
