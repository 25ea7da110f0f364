pub mod types;
pub mod store;
pub mod snap;
pub mod hit;
pub mod chains;
pub mod session;

pub use chains::has_closed_loop;
pub use hit::find_nearest_segment;
pub use session::{DrawingSession, StrokeState};
pub use snap::{find_snap_point, SnapResult};
pub use store::SegmentStore;
pub use types::{PreviewSegment, SketchSnapshot, SnapIndicator};

#[cfg(test)]
mod tests_session;

#[cfg(test)]
mod tests_snapshot;
