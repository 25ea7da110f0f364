pub mod config;
pub mod geometry;
pub mod sketch;

pub use config::{ConfigError, SketchConfig, SnapMetric};
pub use geometry::{Point, Segment};
pub use sketch::DrawingSession;
