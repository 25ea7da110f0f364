use super::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A canvas position in whole pixels.
///
/// Equality and hashing are by coordinate value, so points double as node
/// keys in the endpoint graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sub-pixel view of this point for projection and angle math.
    pub fn to_vector(self) -> Vector2 {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Round a sub-pixel position to the nearest pixel (half away from zero).
    pub fn from_vector(v: Vector2) -> Self {
        Self {
            x: v.x.round() as i32,
            y: v.y.round() as i32,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A straight line between two points.
///
/// `p1` is where the stroke started and `p2` where it ended; graph code
/// treats the pair as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Zero-length segments never enter a sketch.
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.p1, self.p2]
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.p1, self.p2)
    }
}
