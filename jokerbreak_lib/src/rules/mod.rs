pub mod cards;
pub mod characters;
pub mod events;
pub mod game;
pub mod player;
pub mod states;
pub mod status;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum PlayerPos {
    P1,
    P2,
}

impl PlayerPos {
    pub fn other(&self) -> PlayerPos {
        match self {
            PlayerPos::P1 => PlayerPos::P2,
            PlayerPos::P2 => PlayerPos::P1,
        }
    }
}

/// Where a turn currently stands. The phases cycle; there is no terminal
/// phase, ending a match is the caller's call.
#[derive(Serialize, Deserialize, Eq, PartialEq, Copy, Clone, Debug)]
pub enum TurnPhase {
    TurnStart,
    AwaitingChoices,
    Resolving,
    TurnEnd,
}
