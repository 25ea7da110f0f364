//! Text-frame protocol spoken over `/ws`.
//!
//! Client frames are `COMMAND` or `COMMAND:{json}`. Server frames use the
//! same `PREFIX:{json}` shape.

use serde::Serialize;
use serde_json::json;
use sketch_core::sketch::SketchSnapshot;
use sketch_core::Point;
use thiserror::Error;

/// A pointer or keyboard action, already disambiguated by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Primary button down
    Press(Point),
    /// Pointer moved
    Move(Point),
    /// Primary button up
    Release(Point),
    /// Secondary click: delete the segment under the pointer
    Delete(Point),
    /// Ask whether the sketch contains a closed contour
    CheckLoop,
    /// Resend the full sketch state
    State,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command {0} requires a point payload")]
    MissingPayload(&'static str),

    #[error("Command {0} does not take a payload")]
    UnexpectedPayload(&'static str),

    #[error("Invalid point payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl ProtocolError {
    pub fn code(&self) -> &'static str {
        match self {
            ProtocolError::UnknownCommand(_) => "UNKNOWN_COMMAND",
            ProtocolError::MissingPayload(_) => "MISSING_PAYLOAD",
            ProtocolError::UnexpectedPayload(_) => "UNEXPECTED_PAYLOAD",
            ProtocolError::InvalidPayload(_) => "INVALID_PAYLOAD",
        }
    }
}

pub fn parse_command(text: &str) -> Result<Command, ProtocolError> {
    let (name, payload) = match text.split_once(':') {
        Some((name, payload)) => (name, Some(payload)),
        None => (text, None),
    };

    let point = |name: &'static str| -> Result<Point, ProtocolError> {
        let payload = payload.ok_or(ProtocolError::MissingPayload(name))?;
        Ok(serde_json::from_str(payload)?)
    };
    let bare = |name: &'static str, command: Command| match payload {
        Some(_) => Err(ProtocolError::UnexpectedPayload(name)),
        None => Ok(command),
    };

    match name.trim() {
        "PRESS" => point("PRESS").map(Command::Press),
        "MOVE" => point("MOVE").map(Command::Move),
        "RELEASE" => point("RELEASE").map(Command::Release),
        "DELETE" => point("DELETE").map(Command::Delete),
        "CHECK_LOOP" => bare("CHECK_LOOP", Command::CheckLoop),
        "STATE" => bare("STATE", Command::State),
        other => Err(ProtocolError::UnknownCommand(other.to_string())),
    }
}

fn frame<T: Serialize>(prefix: &str, body: &T) -> String {
    format!("{}:{}", prefix, serde_json::to_string(body).unwrap_or("{}".to_string()))
}

pub fn sketch_update(snapshot: &SketchSnapshot) -> String {
    frame("SKETCH_UPDATE", snapshot)
}

/// Pointer position plus a ready-to-display status line.
pub fn cursor_update(point: Point) -> String {
    frame("CURSOR_UPDATE", &json!({
        "x": point.x,
        "y": point.y,
        "text": format!("Cursor: {}", point),
    }))
}

pub fn loop_status(closed: bool) -> String {
    let text = if closed { "Contour closed" } else { "Contour NOT closed" };
    frame("LOOP_STATUS", &json!({ "closed": closed, "text": text }))
}

/// Format an error as a JSON message for the frontend
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    frame("ERROR_UPDATE", &json!({
        "code": code,
        "message": message,
        "severity": severity
    }))
}
