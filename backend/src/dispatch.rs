use crate::protocol::{self, Command};
use sketch_core::DrawingSession;
use tracing::{debug, info};

/// Apply one command to the session and return the frames to send back.
pub fn apply(session: &mut DrawingSession, command: Command) -> Vec<String> {
    match command {
        Command::Press(point) => {
            session.begin_stroke(point);
            vec![protocol::sketch_update(&session.snapshot())]
        }
        Command::Move(point) => {
            // Cursor status is reported whether or not a stroke is active
            let mut frames = vec![protocol::cursor_update(point)];
            if session.is_drawing() {
                session.update_stroke(point);
                frames.push(protocol::sketch_update(&session.snapshot()));
            }
            frames
        }
        Command::Release(point) => {
            let committed = session.end_stroke(point);
            debug!(committed, count = session.segments().len(), "stroke finished");
            vec![protocol::sketch_update(&session.snapshot())]
        }
        Command::Delete(point) => match session.delete_near(point) {
            Some(segment) => {
                info!("Deleted segment {} near {}", segment, point);
                vec![protocol::sketch_update(&session.snapshot())]
            }
            None => {
                debug!("No segment near {}", point);
                Vec::new()
            }
        },
        Command::CheckLoop => {
            let closed = session.query_loop_closed();
            info!("Loop check over {} segments: closed={}", session.segments().len(), closed);
            vec![protocol::loop_status(closed)]
        }
        Command::State => vec![protocol::sketch_update(&session.snapshot())],
    }
}
