use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use verdant_core::config::MAX_PAYLOAD_BYTES;
use verdant_protocol::{Command, Envelope, PayloadKind};

use crate::app::AppState;

/// Axum handler — upgrades HTTP to WebSocket at GET /ws.
/// Non-upgrade requests get the extractor's 400 rejection.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.max_message_size(MAX_PAYLOAD_BYTES)
        .on_upgrade(|socket| run_connection(socket, state))
}

/// Per-connection loop — lives for the entire WS session.
async fn run_connection(socket: WebSocket, state: Arc<AppState>) {
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    // Writer task: sole owner of the sink. All outbound frames for this
    // socket funnel through one channel, so concurrent broadcasts can
    // never interleave partial writes.
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let closing = matches!(msg, Message::Close(_));
            if sink.send(msg).await.is_err() || closing {
                break;
            }
        }
    });

    // Queue the status snapshot before registering: the writer drains in
    // order, so this is the first envelope the client receives even if a
    // broadcast lands right after registration.
    let status = {
        let on = *state.watering.lock().await;
        Envelope::new(PayloadKind::Status, status_text(on))
    };
    if tx.send(Message::Text(status.to_json().into())).is_err() {
        return;
    }

    let conn_id = state.registry.register(tx.clone());
    info!(conn_id = %conn_id, clients = state.registry.len(), "ws client connected");

    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                // Any text frame, recognized or not, rebroadcasts the
                // committed watering state.
                let on = apply_command(&state, &text).await;
                let env = Envelope::new(PayloadKind::Watering, if on { "ON" } else { "OFF" });
                state.broadcaster.broadcast(&env.to_json());
            }
            Ok(Message::Ping(data)) => {
                let _ = tx.send(Message::Pong(data));
            }
            Ok(Message::Close(frame)) => {
                // echo the peer's close code and reason back
                let _ = tx.send(Message::Close(frame));
                break;
            }
            Ok(_) => {}
            Err(e) => {
                debug!(conn_id = %conn_id, error = %e, "ws read error");
                break;
            }
        }
    }

    state.registry.unregister(&conn_id);
    info!(conn_id = %conn_id, clients = state.registry.len(), "ws client disconnected");
}

/// Apply one inbound text frame to the shared watering switch and return
/// the committed value. Unrecognized text leaves the switch untouched.
async fn apply_command(state: &AppState, text: &str) -> bool {
    let mut on = state.watering.lock().await;
    match Command::parse(text) {
        Some(Command::On) => *on = true,
        Some(Command::Off) => *on = false,
        None => debug!(len = text.len(), "unrecognized command ignored"),
    }
    *on
}

fn status_text(on: bool) -> String {
    format!("Watering is {}", if on { "ON" } else { "OFF" })
}
