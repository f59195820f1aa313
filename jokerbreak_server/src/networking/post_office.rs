use crate::lobby::LobbyMessage;
use crate::networking::{ConnectionId, GameConnectionReader, GameConnectionWriter};
use jokerbreak_lib::net::connection::{ConnectionReader, ConnectionWriter, ReadError};
use jokerbreak_lib::net::frames::ServerMessageFrame;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::warn;

/// Outgoing mail queue depth per connection. A client that stops reading
/// gets its updates dropped rather than blocking the lobby.
const OUTGOING_CAPACITY: usize = 32;

/// Splits one client socket into a reader pump and a writer pump and
/// registers the connection with the lobby. Every parsed frame goes to the
/// lobby; the writer drains whatever the lobby or a session posts.
///
/// Fails only when the lobby is no longer running.
pub async fn spawn_connection(
    id: ConnectionId,
    stream: TcpStream,
    lobby_tx: mpsc::Sender<LobbyMessage>,
) -> Result<(), mpsc::error::SendError<LobbyMessage>> {
    let (read_half, write_half) = stream.into_split();
    let reader = ConnectionReader::new(read_half);
    let writer = ConnectionWriter::new(write_half);

    let (outgoing_tx, outgoing_rx) = mpsc::channel(OUTGOING_CAPACITY);

    tokio::spawn(receive_posts(id, reader, lobby_tx.clone()));
    tokio::spawn(handle_send_requests(id, outgoing_rx, writer));

    lobby_tx
        .send(LobbyMessage::Connected {
            id,
            outgoing: outgoing_tx,
        })
        .await
}

async fn receive_posts(
    id: ConnectionId,
    mut reader: GameConnectionReader,
    lobby_tx: mpsc::Sender<LobbyMessage>,
) {
    loop {
        match reader.read_frame().await {
            Ok(frame) => {
                if lobby_tx
                    .send(LobbyMessage::Frame { id, frame })
                    .await
                    .is_err()
                {
                    return;
                }
            }
            Err(ReadError::InvalidFrame(err)) => {
                // Non-goal to police message shapes; skip and keep reading.
                warn!("client {id}: dropping a malformed frame: {err}");
            }
            Err(_) => break,
        }
    }

    let _ = lobby_tx.send(LobbyMessage::Disconnected { id }).await;
}

async fn handle_send_requests(
    id: ConnectionId,
    mut outgoing_rx: mpsc::Receiver<ServerMessageFrame>,
    mut writer: GameConnectionWriter,
) {
    while let Some(frame) = outgoing_rx.recv().await {
        if let Err(err) = writer.write_frame(&frame).await {
            warn!("client {id}: write failed, stopping the writer: {err}");
            return;
        }
    }
}
