use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use sketch_core::{DrawingSession, SketchConfig};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

mod config;
mod dispatch;
mod protocol;

use config::{BackendConfig, BackendError};

// Application State
struct AppState {
    config: SketchConfig,
}

#[tokio::main]
async fn main() -> Result<(), BackendError> {
    tracing_subscriber::fmt::init();

    let BackendConfig { addr, sketch } = BackendConfig::from_env()?;
    info!(?sketch, "loaded sketch config");

    let shared_state = Arc::new(AppState { config: sketch });

    let app = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> &'static str {
    "Hello from Sketch Backend!"
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| {
        let span = tracing::info_span!("connection", id = %Uuid::new_v4());
        handle_socket(socket, state).instrument(span)
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("Client connected");

    // Each connection draws on its own sketch; nothing outlives the socket
    let mut session = match DrawingSession::with_config(state.config.clone()) {
        Ok(session) => session,
        Err(e) => {
            warn!("Rejected session: {}", e);
            return;
        }
    };

    let (mut sender, mut receiver) = socket.split();

    if sender
        .send(Message::Text(protocol::sketch_update(&session.snapshot())))
        .await
        .is_err()
    {
        return;
    }

    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                warn!("WebSocket error: {}", e);
                break;
            }
        };

        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        debug!("Received message: {}", text);

        let frames = match protocol::parse_command(&text) {
            Ok(command) => dispatch::apply(&mut session, command),
            Err(e) => {
                warn!("Rejected message {:?}: {}", text, e);
                vec![protocol::format_error(e.code(), &e.to_string(), "warning")]
            }
        };

        for frame in frames {
            if sender.send(Message::Text(frame)).await.is_err() {
                return;
            }
        }
    }

    info!("Client disconnected with {} segments", session.segments().len());
}
