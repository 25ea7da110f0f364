//! Interactive stroke state machine.
//!
//! A [`DrawingSession`] owns the committed segments and the stroke in
//! progress. The event layer feeds it already-disambiguated pointer
//! commands and reads back whatever it needs to render.
//!
//! ```text
//!   Idle --begin_stroke--> Active --update_stroke--> Active
//!                            |
//!                            +----end_stroke----> Idle (segment committed)
//! ```
//!
//! Commands that make no sense in the current state are ignored rather than
//! reported, so a misbehaving caller can never corrupt the sketch.

use super::chains::has_closed_loop;
use super::hit::find_nearest_segment;
use super::snap::find_snap_point;
use super::store::SegmentStore;
use super::types::{PreviewSegment, SketchSnapshot, SnapIndicator};
use crate::config::{ConfigError, SketchConfig};
use crate::geometry::utils_2d::angle_snap;
use crate::geometry::{Point, Segment};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Active,
}

#[derive(Debug, Clone)]
pub struct DrawingSession {
    config: SketchConfig,
    store: SegmentStore,
    state: StrokeState,
    start_point: Point,
    current_point: Point,
    is_snapping: bool,
    snap_point: Point,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            config: SketchConfig::default(),
            store: SegmentStore::new(),
            state: StrokeState::Idle,
            start_point: Point::default(),
            current_point: Point::default(),
            is_snapping: false,
            snap_point: Point::default(),
        }
    }

    pub fn with_config(config: SketchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..Self::new() })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == StrokeState::Active
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Start a stroke at `raw`, attached to a nearby endpoint if there is one.
    ///
    /// Calling this mid-stroke abandons the current stroke and starts over.
    pub fn begin_stroke(&mut self, raw: Point) {
        let start = self.resolve(raw);
        self.start_point = start;
        self.current_point = start;
        self.state = StrokeState::Active;
    }

    /// Move the free end of the stroke. Ignored while idle.
    pub fn update_stroke(&mut self, raw: Point) {
        if self.state == StrokeState::Idle {
            return;
        }
        self.current_point = self.track(raw);
    }

    /// Finish the stroke at `raw` and commit it.
    ///
    /// Returns whether a segment was added. A stroke that collapses to a
    /// single point after snapping is dropped. Ignored while idle.
    pub fn end_stroke(&mut self, raw: Point) -> bool {
        if self.state == StrokeState::Idle {
            return false;
        }

        self.current_point = self.track(raw);
        let segment = Segment::new(self.start_point, self.current_point);

        self.state = StrokeState::Idle;
        self.is_snapping = false;

        if segment.is_degenerate() {
            debug!(point = %segment.p1, "dropped zero-length stroke");
            return false;
        }

        self.store.push(segment);
        debug!(%segment, count = self.store.len(), "committed segment");
        true
    }

    /// Delete the first segment within the hit threshold of `point`.
    pub fn delete_near(&mut self, point: Point) -> Option<Segment> {
        let index = find_nearest_segment(point, self.store.as_slice(), self.config.hit_threshold)?;
        let removed = self.store.remove(index)?;
        debug!(index, segment = %removed, "deleted segment");
        Some(removed)
    }

    pub fn query_loop_closed(&self) -> bool {
        has_closed_loop(self.store.as_slice())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn segments(&self) -> &[Segment] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    pub fn preview_segment(&self) -> PreviewSegment {
        PreviewSegment {
            start: self.start_point,
            end: self.current_point,
            is_drawing: self.is_drawing(),
        }
    }

    pub fn snap_indicator(&self) -> SnapIndicator {
        SnapIndicator {
            is_snapping: self.is_snapping,
            snap_point: self.snap_point,
        }
    }

    pub fn snapshot(&self) -> SketchSnapshot {
        SketchSnapshot {
            segments: self.store.as_slice().to_vec(),
            preview: self.preview_segment(),
            snap: self.snap_indicator(),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Endpoint snap, refreshing the snap indicator.
    fn resolve(&mut self, raw: Point) -> Point {
        let snap = find_snap_point(raw, self.store.as_slice(), &self.config);
        self.is_snapping = snap.is_snapping;
        if snap.is_snapping {
            self.snap_point = snap.point;
        }
        snap.point
    }

    /// Endpoint snap followed by angle snap relative to the stroke start.
    fn track(&mut self, raw: Point) -> Point {
        let resolved = self.resolve(raw);
        if self.config.angle_snap {
            angle_snap(self.start_point, resolved, self.config.angle_tolerance_deg)
        } else {
            resolved
        }
    }
}
