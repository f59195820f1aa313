use crate::rules::cards::CardMode;
use crate::rules::events::GameEvent;
use crate::rules::game::IllegalChoice;
use crate::rules::states::StateView;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PlayerToGameMessage {
    /// Flip a blank card in the current hand before submitting.
    ToggleMode { index: usize },
    /// Submit the chosen card for this turn. Submitting again before the
    /// turn resolves replaces the previous choice.
    SubmitCard { index: usize },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GameToPlayerMessage {
    /// A new turn: the receiving seat's view of the freshly dealt state.
    TurnStarted { state: StateView },
    /// Acknowledges a successful mode toggle.
    ModeChanged { index: usize, mode: CardMode },
    /// Resolution log, relayed to both seats.
    Events(Vec<GameEvent>),
    /// The receiving seat's submission was refused; pick again.
    ChoiceRejected(IllegalChoice),
    /// Post-resolution snapshot for re-rendering.
    StateUpdate { state: StateView },
    OpponentLeft,
}
