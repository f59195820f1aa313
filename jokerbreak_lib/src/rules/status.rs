use serde::{Deserialize, Serialize};

/// Damage a poison status deals to its owner at every turn end.
pub const POISON_TURN_DAMAGE: i32 = 2;

/// A timed condition attached to a player.
///
/// A player holds at most one `Poison` (further applications merge into its
/// counter) but any number of independent `Wound` instances. The owning
/// player drives the lifecycle; a status never schedules itself.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusEffect {
    Poison { stacks: i32 },
    Wound { per_hit: i32, remaining: i32 },
}

impl StatusEffect {
    /// Reaction to the owner receiving damage from any source. Returns the
    /// extra direct damage this status contributes; the extra damage does
    /// not re-trigger reactions.
    pub fn on_damage_received(&mut self, _incoming: i32) -> i32 {
        match self {
            StatusEffect::Poison { .. } => 0,
            StatusEffect::Wound { per_hit, remaining } => {
                if *remaining > 0 {
                    *remaining -= 1;
                    *per_hit
                } else {
                    0
                }
            }
        }
    }

    /// End-of-turn tick. Returns the damage the owner must route through its
    /// normal damage intake (so wounds react to a poison tick too).
    pub fn on_turn_end(&mut self) -> i32 {
        match self {
            StatusEffect::Poison { stacks } => {
                *stacks -= 1;
                POISON_TURN_DAMAGE
            }
            StatusEffect::Wound { .. } => 0,
        }
    }

    pub fn is_expired(&self) -> bool {
        match self {
            StatusEffect::Poison { stacks } => *stacks <= 0,
            StatusEffect::Wound { remaining, .. } => *remaining <= 0,
        }
    }
}
