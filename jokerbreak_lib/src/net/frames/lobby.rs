use crate::rules::characters::CharacterId;
use crate::rules::PlayerPos;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PlayerToLobbyMessage {
    /// Queue up for a match with the chosen character. Sending this again
    /// while already waiting updates the queued character.
    JoinQueue { character: CharacterId },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum LobbyToPlayerMessage {
    /// Number of connected clients, broadcast on every connect/disconnect.
    ConnectedCount { count: u32 },
    /// Queued; no opponent available yet.
    Waiting,
    MatchFound {
        seat: PlayerPos,
        opponent_character: CharacterId,
    },
}
