use super::session::DrawingSession;
use super::types::SketchSnapshot;
use crate::geometry::{Point, Segment};

#[test]
fn test_snapshot_reflects_session() {
    let mut session = DrawingSession::new();
    session.begin_stroke(Point::new(0, 0));
    session.end_stroke(Point::new(0, 40));

    session.begin_stroke(Point::new(2, 38));
    session.update_stroke(Point::new(60, 41));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.segments, vec![Segment::new(Point::new(0, 0), Point::new(0, 40))]);
    assert!(snapshot.preview.is_drawing);
    assert_eq!(snapshot.preview.start, Point::new(0, 40));
    assert_eq!(snapshot.preview.end, Point::new(60, 40));
    assert!(!snapshot.snap.is_snapping);
}

#[test]
fn test_snapshot_json_shape() {
    let mut session = DrawingSession::new();
    session.begin_stroke(Point::new(1, 2));
    session.end_stroke(Point::new(1, 30));

    let json = serde_json::to_value(session.snapshot()).expect("Failed to serialize snapshot");
    assert_eq!(json["segments"][0]["p1"]["x"], 1);
    assert_eq!(json["segments"][0]["p2"]["y"], 30);
    assert_eq!(json["preview"]["is_drawing"], false);
    assert_eq!(json["snap"]["is_snapping"], false);

    let restored: SketchSnapshot = serde_json::from_value(json).expect("Failed to deserialize snapshot");
    assert_eq!(restored, session.snapshot());
}
