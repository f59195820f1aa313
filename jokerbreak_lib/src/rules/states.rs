use crate::rules::cards::Card;
use crate::rules::characters::CharacterId;
use crate::rules::player::Player;
use crate::rules::status::StatusEffect;
use crate::rules::{PlayerPos, TurnPhase};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Per-seat storage, indexable by `PlayerPos`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayersData<TData> {
    pub p1: TData,
    pub p2: TData,
}

impl<T> PlayersData<T> {
    pub fn new(p1: T, p2: T) -> Self {
        Self { p1, p2 }
    }

    /// Splits into (`first`, the other seat) mutable halves.
    pub fn pair_mut(&mut self, first: PlayerPos) -> (&mut T, &mut T) {
        match first {
            PlayerPos::P1 => (&mut self.p1, &mut self.p2),
            PlayerPos::P2 => (&mut self.p2, &mut self.p1),
        }
    }
}

impl<T> Index<PlayerPos> for PlayersData<T> {
    type Output = T;

    fn index(&self, index: PlayerPos) -> &Self::Output {
        match index {
            PlayerPos::P1 => &self.p1,
            PlayerPos::P2 => &self.p2,
        }
    }
}

impl<T> IndexMut<PlayerPos> for PlayersData<T> {
    fn index_mut(&mut self, index: PlayerPos) -> &mut Self::Output {
        match index {
            PlayerPos::P1 => &mut self.p1,
            PlayerPos::P2 => &mut self.p2,
        }
    }
}

/// A hand as one particular seat gets to see it. Opponents only learn the
/// card count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum HandView {
    Own(Vec<Card>),
    Hidden { count: usize },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerStateView {
    pub character: CharacterId,
    pub hp: i32,
    pub max_hp: i32,
    pub jkp: i32,
    pub jkp_cost: i32,
    pub hand: HandView,
    pub status_list: Vec<StatusEffect>,
}

impl PlayerStateView {
    pub(crate) fn from_player(player: &Player, reveal_hand: bool) -> Self {
        let data = player.data();
        Self {
            character: player.character,
            hp: player.hp,
            max_hp: data.max_hp,
            jkp: player.jkp,
            jkp_cost: data.jkp_cost,
            hand: if reveal_hand {
                HandView::Own(player.hand.clone())
            } else {
                HandView::Hidden {
                    count: player.hand.len(),
                }
            },
            status_list: player.status_list.clone(),
        }
    }
}

/// Everything a seat needs to render the match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StateView {
    pub turn: u32,
    pub phase: TurnPhase,
    pub players: PlayersData<PlayerStateView>,
}
