mod lobby;
mod networking;
mod session;

use networking::ConnectionId;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{error, info};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind the listen port");
    info!("listening on port {port}");

    let (lobby_tx, lobby_rx) = mpsc::channel(64);
    tokio::spawn(lobby::run_lobby(lobby_rx));

    let mut next_id = 0u32;
    loop {
        let (socket, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                error!("accept failed: {err}");
                continue;
            }
        };

        next_id += 1;
        let id = ConnectionId(next_id);
        info!("client {id} connected from {addr}");

        if networking::spawn_connection(id, socket, lobby_tx.clone())
            .await
            .is_err()
        {
            // Lobby gone; nothing left to serve.
            error!("lobby task is down, shutting down the accept loop");
            return;
        }
    }
}
