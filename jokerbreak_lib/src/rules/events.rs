use crate::rules::cards::Card;
use crate::rules::status::StatusEffect;
use crate::rules::PlayerPos;
use serde::{Deserialize, Serialize};

/// One discrete thing that happened during turn resolution.
///
/// The resolver returns these instead of printing anything; a presentation
/// layer decides how to render them. Hands are deliberately not carried here
/// (only that a deal happened) so the whole log can be relayed to both seats
/// without leaking hidden cards; snapshots carry the owner's hand.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TurnStarted { turn: u32 },
    HandDealt { player: PlayerPos },
    Matchup { p1_card: Card, p2_card: Card },
    Winner { player: PlayerPos },
    Draw,
    /// A spell break lost to a non-joker card; `player` is the penalized side.
    BreakFailure { player: PlayerPos },
    PassiveTriggered { player: PlayerPos },
    Damage { player: PlayerPos, amount: i32, hp_after: i32 },
    Healed { player: PlayerPos, amount: i32, hp_after: i32 },
    StatusApplied { player: PlayerPos, status: StatusEffect },
    StatusExpired { player: PlayerPos, status: StatusEffect },
    ResourceChanged { player: PlayerPos, diff: i32, jkp_after: i32 },
    ChoiceRejected { player: PlayerPos },
    TurnEnded { turn: u32 },
}
