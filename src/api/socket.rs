use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::game::GameSnapshot;
use crate::shared::AppState;

/// GET /game/ws
/// Streams every published state as a JSON text frame, starting with the current one
pub async fn game_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let snapshots = state.game.subscribe();
    ws.on_upgrade(move |socket| stream_snapshots(socket, snapshots))
}

async fn stream_snapshots(socket: WebSocket, mut snapshots: watch::Receiver<GameSnapshot>) {
    info!("Snapshot stream connected");
    let (mut sender, mut receiver) = socket.split();

    // The first frame is whatever is current
    snapshots.mark_changed();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    debug!("Game runner stopped, closing snapshot stream");
                    break;
                }

                let serialized = {
                    let snapshot = snapshots.borrow_and_update();
                    serde_json::to_string(&*snapshot)
                };
                let payload = match serialized {
                    Ok(payload) => payload,
                    Err(e) => {
                        warn!(error = %e, "Failed to serialize snapshot");
                        continue;
                    }
                };

                if sender.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }

            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {} // Commands go through the HTTP routes
                    Some(Err(e)) => {
                        debug!(error = %e, "Snapshot stream receive failed");
                        break;
                    }
                }
            }
        }
    }

    let _ = sender.send(Message::Close(None)).await;
    info!("Snapshot stream disconnected");
}
