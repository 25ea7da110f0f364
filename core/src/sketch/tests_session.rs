use super::session::{DrawingSession, StrokeState};
use crate::config::{ConfigError, SketchConfig};
use crate::geometry::{Point, Segment};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn draw(session: &mut DrawingSession, from: Point, to: Point) -> bool {
    session.begin_stroke(from);
    session.update_stroke(to);
    session.end_stroke(to)
}

#[test]
fn test_stroke_commits_segment() {
    let mut session = DrawingSession::new();
    session.begin_stroke(p(0, 0));
    assert_eq!(session.state(), StrokeState::Active);

    session.update_stroke(p(30, 40));
    let preview = session.preview_segment();
    assert!(preview.is_drawing);
    assert_eq!(preview.start, p(0, 0));
    assert_eq!(preview.end, p(30, 40));

    assert!(session.end_stroke(p(30, 40)));
    assert_eq!(session.state(), StrokeState::Idle);
    assert_eq!(session.segments(), &[Segment::new(p(0, 0), p(30, 40))]);
    assert!(!session.preview_segment().is_drawing);
}

#[test]
fn test_update_applies_angle_snap() {
    let mut session = DrawingSession::new();
    session.begin_stroke(p(0, 0));
    session.update_stroke(p(20, 1));
    assert_eq!(session.preview_segment().end, p(20, 0));
}

#[test]
fn test_update_snaps_to_zero_degrees_with_wider_band() {
    // atan(1/10) is 5.71 deg, so this needs a band wider than the default
    let config = SketchConfig { angle_tolerance_deg: 6.0, ..Default::default() };
    let mut session = DrawingSession::with_config(config).unwrap();
    session.begin_stroke(p(0, 0));
    session.update_stroke(p(10, 1));
    assert_eq!(session.preview_segment().end, p(10, 0));
}

#[test]
fn test_angle_snap_can_be_disabled() {
    let config = SketchConfig { angle_snap: false, ..Default::default() };
    let mut session = DrawingSession::with_config(config).unwrap();
    session.begin_stroke(p(0, 0));
    session.update_stroke(p(20, 1));
    assert_eq!(session.preview_segment().end, p(20, 1));
}

#[test]
fn test_begin_snaps_to_existing_endpoint() {
    let mut session = DrawingSession::new();
    assert!(draw(&mut session, p(0, 0), p(100, 0)));

    session.begin_stroke(p(103, 4));
    assert_eq!(session.preview_segment().start, p(100, 0));
    let indicator = session.snap_indicator();
    assert!(indicator.is_snapping);
    assert_eq!(indicator.snap_point, p(100, 0));
}

#[test]
fn test_snap_indicator_recomputed_on_move() {
    let mut session = DrawingSession::new();
    draw(&mut session, p(0, 0), p(100, 0));

    session.begin_stroke(p(0, 200));
    session.update_stroke(p(2, 3));
    assert!(session.snap_indicator().is_snapping);

    session.update_stroke(p(50, 50));
    assert!(!session.snap_indicator().is_snapping);
}

#[test]
fn test_end_clears_snap_indicator() {
    let mut session = DrawingSession::new();
    draw(&mut session, p(0, 0), p(100, 0));

    session.begin_stroke(p(0, 100));
    assert!(session.end_stroke(p(99, 1)));
    assert!(!session.snap_indicator().is_snapping);
    // Stroke was pulled onto (100,0) by the endpoint snap
    assert_eq!(session.segments()[1], Segment::new(p(0, 100), p(100, 0)));
}

#[test]
fn test_zero_length_stroke_is_dropped() {
    let mut session = DrawingSession::new();
    session.begin_stroke(p(5, 5));
    assert!(!session.end_stroke(p(5, 5)));
    assert!(session.segments().is_empty());
    assert_eq!(session.state(), StrokeState::Idle);
}

#[test]
fn test_stroke_collapsed_by_snap_is_dropped() {
    let mut session = DrawingSession::new();
    draw(&mut session, p(0, 0), p(100, 0));

    // Both ends land inside the snap radius of (0,0)
    session.begin_stroke(p(2, 2));
    assert!(!session.end_stroke(p(-3, 1)));
    assert_eq!(session.segments().len(), 1);
}

#[test]
fn test_update_and_end_ignored_while_idle() {
    let mut session = DrawingSession::new();
    session.update_stroke(p(40, 40));
    assert!(!session.end_stroke(p(40, 40)));

    let preview = session.preview_segment();
    assert!(!preview.is_drawing);
    assert_eq!(preview.end, Point::default());
    assert!(session.segments().is_empty());
}

#[test]
fn test_begin_while_active_restarts_stroke() {
    let mut session = DrawingSession::new();
    session.begin_stroke(p(0, 0));
    session.update_stroke(p(50, 0));
    session.begin_stroke(p(200, 200));

    let preview = session.preview_segment();
    assert_eq!(preview.start, p(200, 200));
    assert_eq!(preview.end, p(200, 200));
    assert!(session.segments().is_empty());
}

#[test]
fn test_delete_near_removes_only_hit_segment() {
    let mut session = DrawingSession::new();
    draw(&mut session, p(0, 0), p(10, 0));
    draw(&mut session, p(0, 50), p(100, 50));

    let removed = session.delete_near(p(5, 0));
    assert_eq!(removed, Some(Segment::new(p(0, 0), p(10, 0))));
    assert_eq!(session.segments(), &[Segment::new(p(0, 50), p(100, 50))]);
}

#[test]
fn test_delete_near_miss_is_noop() {
    let mut session = DrawingSession::new();
    draw(&mut session, p(0, 0), p(10, 0));
    assert_eq!(session.delete_near(p(5, 20)), None);
    assert_eq!(session.segments().len(), 1);
}

#[test]
fn test_delete_during_stroke_keeps_stroke() {
    let mut session = DrawingSession::new();
    draw(&mut session, p(0, 0), p(100, 0));

    session.begin_stroke(p(0, 200));
    assert!(session.delete_near(p(50, 2)).is_some());
    assert!(session.is_drawing());
    assert!(session.end_stroke(p(0, 300)));
    assert_eq!(session.segments(), &[Segment::new(p(0, 200), p(0, 300))]);
}

#[test]
fn test_drawn_triangle_closes() {
    let mut session = DrawingSession::new();
    draw(&mut session, p(0, 0), p(100, 0));
    assert!(!session.query_loop_closed());
    draw(&mut session, p(100, 0), p(100, 100));
    assert!(!session.query_loop_closed());
    // Start and end are both a few pixels off; endpoint snap joins them
    draw(&mut session, p(98, 97), p(3, -2));
    assert!(session.query_loop_closed());

    session.delete_near(p(50, 0));
    assert!(!session.query_loop_closed());
}

#[test]
fn test_stroke_across_whole_coordinate_range() {
    let mut session = DrawingSession::new();
    session.begin_stroke(p(i32::MIN, 0));
    session.update_stroke(p(i32::MAX, 0));
    assert_eq!(session.preview_segment().end, p(i32::MAX, 0));
    assert!(session.end_stroke(p(i32::MAX, 0)));
    assert_eq!(session.delete_near(p(0, 0)), Some(Segment::new(p(i32::MIN, 0), p(i32::MAX, 0))));
}

#[test]
fn test_with_config_rejects_invalid() {
    let config = SketchConfig { snap_radius: f64::INFINITY, ..Default::default() };
    assert!(matches!(
        DrawingSession::with_config(config),
        Err(ConfigError::InvalidDistance { field: "snap_radius", .. })
    ));
}
