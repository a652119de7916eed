//! Live update socket.
//!
//! Each client gets its own broadcast subscription. A client that falls behind
//! the hub's buffer skips the missed events and stays connected.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{
    sink::{Sink, SinkExt},
    stream::StreamExt,
};
use tokio::sync::broadcast::{error::RecvError, Receiver};

use crate::{
    model::api::SocketEventDto,
    server::{service::notification::events, state::AppState},
};

const WELCOME_MESSAGE: &str = "Successfully connected to the API";

/// GET /api/socket - Upgrade to a WebSocket receiving every published event
pub async fn socket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let events = state.socket_hub.subscribe();
    ws.on_upgrade(move |socket| handle_socket(socket, events))
}

async fn handle_socket(socket: WebSocket, mut events: Receiver<SocketEventDto>) {
    let (mut sender, mut receiver) = socket.split();

    let welcome = SocketEventDto {
        event: events::DEBUG.to_string(),
        data: serde_json::Value::String(WELCOME_MESSAGE.to_string()),
    };
    if !send_event(&mut sender, &welcome).await {
        return;
    }
    tracing::debug!("Socket client connected");

    let mut send_task = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if !send_event(&mut sender, &event).await {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Socket client lagged behind, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Inbound frames are ignored; reading only detects the close.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    }

    tracing::debug!("Socket client disconnected");
}

/// Returns `false` once the client can no longer be written to.
async fn send_event<S>(sender: &mut S, event: &SocketEventDto) -> bool
where
    S: Sink<Message> + Unpin,
{
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to serialize socket event {}: {}", event.event, e);
            return true;
        }
    };

    sender.send(Message::Text(json.into())).await.is_ok()
}
