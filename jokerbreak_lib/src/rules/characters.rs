use crate::rules::cards::Card;
use crate::rules::events::GameEvent;
use crate::rules::player::Player;
use serde::{Deserialize, Serialize};

mod internal;

/// Key of a playable character. Adding a character means adding a variant
/// here, an entry module under `internal`, and an arm in `data`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CharacterId {
    Berserker,
    Venom,
}

impl CharacterId {
    pub fn data(&self) -> &'static CharacterData {
        match self {
            CharacterId::Berserker => &internal::BERSERKER,
            CharacterId::Venom => &internal::VENOM,
        }
    }
}

/// Qualifying events a passive hook is invoked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PassiveTrigger {
    /// The owner landed a hit with an attack-mode blank card.
    AttackHit,
}

pub type PassiveHook = fn(
    owner: &mut Player,
    opponent: &mut Player,
    trigger: PassiveTrigger,
    card: &Card,
    log: &mut Vec<GameEvent>,
);

pub type SkillHook =
    fn(owner: &mut Player, opponent: &mut Player, card_value: i32, log: &mut Vec<GameEvent>);

pub type JokerHook = fn(owner: &mut Player, opponent: &mut Player, log: &mut Vec<GameEvent>);

/// Static definition of one character. Shared read-only across a match.
///
/// The hooks are plain fn fields, so an entry cannot be missing one; the
/// compiler performs the startup validation a dynamic table would need.
pub struct CharacterData {
    pub name: &'static str,
    pub max_hp: i32,
    /// Resource cost of winning with the joker card.
    pub jkp_cost: i32,
    pub passive: PassiveHook,
    pub skill: SkillHook,
    pub joker: JokerHook,
}
