//! Tunable constants for snapping and hit testing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest angle tolerance that still keeps the eight 45° bands apart.
pub const MAX_ANGLE_TOLERANCE_DEG: f64 = 22.5;

/// Distance measure used when comparing a cursor against endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapMetric {
    /// Straight-line distance
    #[default]
    Euclidean,
    /// |dx| + |dy|, a diamond-shaped snap zone
    Manhattan,
}

/// Configuration for a drawing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Maximum distance (in pixels) for an endpoint snap to activate
    pub snap_radius: f64,
    /// How `snap_radius` is measured
    pub snap_metric: SnapMetric,
    /// Maximum distance (in pixels) between a click and a segment it deletes
    pub hit_threshold: f64,
    /// Enable snapping stroke direction to multiples of 45°
    pub angle_snap: bool,
    /// Half-width (in degrees) of each 45° snap band
    pub angle_tolerance_deg: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            snap_radius: 10.0,
            snap_metric: SnapMetric::Euclidean,
            hit_threshold: 6.0,
            angle_snap: true,
            angle_tolerance_deg: 5.0,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidDistance { field: &'static str, value: f64 },

    #[error("angle tolerance must be between 0 and 22.5 degrees (got {0})")]
    InvalidAngleTolerance(f64),
}

impl SketchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_distance("snap_radius", self.snap_radius)?;
        check_distance("hit_threshold", self.hit_threshold)?;

        let tol = self.angle_tolerance_deg;
        if !tol.is_finite() || !(0.0..=MAX_ANGLE_TOLERANCE_DEG).contains(&tol) {
            return Err(ConfigError::InvalidAngleTolerance(tol));
        }
        Ok(())
    }
}

fn check_distance(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDistance { field, value })
    }
}
