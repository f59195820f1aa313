use crate::networking::ConnectionId;
use crate::session::{self, SessionMessage};
use jokerbreak_lib::net::frames::{
    ClientMessageFrame, LobbyToPlayerMessage, PlayerToGameMessage, PlayerToLobbyMessage,
    ServerMessageFrame,
};
use jokerbreak_lib::rules::characters::CharacterId;
use jokerbreak_lib::rules::states::PlayersData;
use jokerbreak_lib::rules::PlayerPos;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Everything the connection pumps report to the lobby.
pub enum LobbyMessage {
    Connected {
        id: ConnectionId,
        outgoing: mpsc::Sender<ServerMessageFrame>,
    },
    Frame {
        id: ConnectionId,
        frame: ClientMessageFrame,
    },
    Disconnected {
        id: ConnectionId,
    },
}

struct ConnectionEntry {
    outgoing: mpsc::Sender<ServerMessageFrame>,
    /// Set while this connection is in a running match.
    session: Option<SessionHandle>,
}

struct SessionHandle {
    seat: PlayerPos,
    tx: mpsc::Sender<SessionMessage>,
}

/// Matchmaking actor. Owns every connection registry entry, a single
/// waiting slot (first to queue waits, second pairs) and routes game frames
/// into the right session. One instance per process; sessions run as
/// independent tasks.
pub async fn run_lobby(mut rx: mpsc::Receiver<LobbyMessage>) {
    let mut lobby = Lobby {
        connections: HashMap::new(),
        waiting: None,
    };

    while let Some(message) = rx.recv().await {
        match message {
            LobbyMessage::Connected { id, outgoing } => {
                lobby.connections.insert(
                    id,
                    ConnectionEntry {
                        outgoing,
                        session: None,
                    },
                );
                lobby.broadcast_count();
            }
            LobbyMessage::Frame { id, frame } => match frame {
                ClientMessageFrame::Lobby(PlayerToLobbyMessage::JoinQueue { character }) => {
                    lobby.join_queue(id, character);
                }
                ClientMessageFrame::Game(message) => lobby.route_to_session(id, message),
            },
            LobbyMessage::Disconnected { id } => {
                lobby.disconnect(id);
            }
        }
    }
}

struct Lobby {
    connections: HashMap<ConnectionId, ConnectionEntry>,
    waiting: Option<(ConnectionId, CharacterId)>,
}

impl Lobby {
    fn join_queue(&mut self, id: ConnectionId, character: CharacterId) {
        if !self.connections.contains_key(&id) {
            return;
        }

        match self.waiting {
            // Re-queueing just updates the chosen character.
            Some((waiting_id, _)) if waiting_id == id => {
                self.waiting = Some((id, character));
            }
            Some((waiting_id, waiting_character)) => {
                self.waiting = None;
                self.start_match(waiting_id, waiting_character, id, character);
            }
            None => {
                self.waiting = Some((id, character));
                self.send_to(id, ServerMessageFrame::Lobby(LobbyToPlayerMessage::Waiting));
            }
        }
    }

    /// The waiting player takes seat P1, the newcomer P2.
    fn start_match(
        &mut self,
        p1_id: ConnectionId,
        p1_character: CharacterId,
        p2_id: ConnectionId,
        p2_character: CharacterId,
    ) {
        let (p1_outgoing, p2_outgoing) =
            match (self.connections.get(&p1_id), self.connections.get(&p2_id)) {
                (Some(p1), Some(p2)) => (p1.outgoing.clone(), p2.outgoing.clone()),
                _ => return,
            };

        info!("match found: {p1_id} ({p1_character:?}) vs {p2_id} ({p2_character:?})");

        let (session_tx, session_rx) = mpsc::channel(32);
        tokio::spawn(session::run_session(
            PlayersData::new(p1_character, p2_character),
            PlayersData::new(p1_outgoing, p2_outgoing),
            session_rx,
        ));

        for (id, seat, opponent_character) in [
            (p1_id, PlayerPos::P1, p2_character),
            (p2_id, PlayerPos::P2, p1_character),
        ] {
            self.send_to(
                id,
                ServerMessageFrame::Lobby(LobbyToPlayerMessage::MatchFound {
                    seat,
                    opponent_character,
                }),
            );
            if let Some(entry) = self.connections.get_mut(&id) {
                entry.session = Some(SessionHandle {
                    seat,
                    tx: session_tx.clone(),
                });
            }
        }
    }

    fn route_to_session(&mut self, id: ConnectionId, message: PlayerToGameMessage) {
        let Some(entry) = self.connections.get_mut(&id) else {
            return;
        };
        let Some(handle) = &entry.session else {
            warn!("client {id}: game frame outside a match, dropping it");
            return;
        };

        let sent = handle.tx.try_send(SessionMessage::Player {
            seat: handle.seat,
            message,
        });
        if sent.is_err() {
            // Session is gone or hopelessly backed up; free the seat so the
            // client can queue again.
            entry.session = None;
        }
    }

    fn disconnect(&mut self, id: ConnectionId) {
        if let Some((waiting_id, _)) = self.waiting {
            if waiting_id == id {
                self.waiting = None;
            }
        }

        if let Some(entry) = self.connections.remove(&id) {
            if let Some(handle) = entry.session {
                let _ = handle.tx.try_send(SessionMessage::PlayerLeft { seat: handle.seat });
            }
        }

        info!("client {id} disconnected");
        self.broadcast_count();
    }

    fn broadcast_count(&self) {
        let count = self.connections.len() as u32;
        for entry in self.connections.values() {
            let frame = ServerMessageFrame::Lobby(LobbyToPlayerMessage::ConnectedCount { count });
            let _ = entry.outgoing.try_send(frame);
        }
    }

    fn send_to(&self, id: ConnectionId, frame: ServerMessageFrame) {
        if let Some(entry) = self.connections.get(&id) {
            let _ = entry.outgoing.try_send(frame);
        }
    }
}
