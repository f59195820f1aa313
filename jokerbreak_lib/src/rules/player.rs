use crate::rules::cards::{Card, CardType};
use crate::rules::characters::{CharacterData, CharacterId};
use crate::rules::events::GameEvent;
use crate::rules::status::StatusEffect;
use crate::rules::PlayerPos;

/// One seat's whole state for a match. Created once, lives for the match;
/// the hand is replaced wholesale every turn while statuses persist until
/// they expire.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: PlayerPos,
    pub character: CharacterId,
    pub hp: i32,
    pub jkp: i32,
    pub hand: Vec<Card>,
    pub status_list: Vec<StatusEffect>,
}

impl Player {
    pub fn new(pos: PlayerPos, character: CharacterId) -> Self {
        Self {
            pos,
            character,
            hp: character.data().max_hp,
            jkp: 0,
            hand: Vec::new(),
            status_list: Vec::new(),
        }
    }

    pub fn data(&self) -> &'static CharacterData {
        self.character.data()
    }

    /// Replaces the hand with the fixed five-card deal. Unplayed cards from
    /// the previous turn do not carry over.
    pub fn deal_hand(&mut self) {
        self.hand = vec![
            Card::new(CardType::Blank),
            Card::new(CardType::Blank),
            Card::new(CardType::Skill),
            Card::new(CardType::Joker),
            Card::new(CardType::SpellBreak),
        ];
    }

    /// Attaches a status. Poison merges additively into the existing
    /// instance; wounds are always appended as independent instances.
    pub fn add_status(&mut self, effect: StatusEffect, log: &mut Vec<GameEvent>) {
        match effect {
            StatusEffect::Poison { stacks } => {
                let existing = self.status_list.iter_mut().find_map(|status| match status {
                    StatusEffect::Poison { stacks } => Some(stacks),
                    _ => None,
                });
                match existing {
                    Some(total) => *total += stacks,
                    None => self.status_list.push(effect),
                }
            }
            StatusEffect::Wound { .. } => self.status_list.push(effect),
        }
        log.push(GameEvent::StatusApplied {
            player: self.pos,
            status: effect,
        });
    }

    /// Damage intake. Every active status reacts to the incoming amount
    /// first, expired statuses are pruned, then the base amount and the
    /// reaction total are applied to hp in that order. Reaction damage never
    /// re-triggers reactions.
    pub fn receive_damage(&mut self, amount: i32, log: &mut Vec<GameEvent>) {
        let mut reaction_damage = 0;
        for status in &mut self.status_list {
            reaction_damage += status.on_damage_received(amount);
        }
        self.prune_expired(log);

        self.lose_hp(amount, log);
        if reaction_damage > 0 {
            self.lose_hp(reaction_damage, log);
        }
    }

    pub fn heal(&mut self, amount: i32, log: &mut Vec<GameEvent>) {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.data().max_hp);
        log.push(GameEvent::Healed {
            player: self.pos,
            amount: self.hp - before,
            hp_after: self.hp,
        });
    }

    pub fn add_jkp(&mut self, diff: i32, log: &mut Vec<GameEvent>) {
        self.jkp += diff;
        log.push(GameEvent::ResourceChanged {
            player: self.pos,
            diff,
            jkp_after: self.jkp,
        });
    }

    /// End-of-turn status pass: collect every tick (only poison produces
    /// one), route it through the normal damage intake, then prune.
    pub(crate) fn run_turn_end_statuses(&mut self, log: &mut Vec<GameEvent>) {
        let ticks: Vec<i32> = self
            .status_list
            .iter_mut()
            .map(|status| status.on_turn_end())
            .filter(|damage| *damage > 0)
            .collect();
        for damage in ticks {
            self.receive_damage(damage, log);
        }
        self.prune_expired(log);
    }

    fn lose_hp(&mut self, amount: i32, log: &mut Vec<GameEvent>) {
        self.hp = (self.hp - amount).max(0);
        log.push(GameEvent::Damage {
            player: self.pos,
            amount,
            hp_after: self.hp,
        });
    }

    fn prune_expired(&mut self, log: &mut Vec<GameEvent>) {
        let pos = self.pos;
        self.status_list.retain(|status| {
            if status.is_expired() {
                log.push(GameEvent::StatusExpired {
                    player: pos,
                    status: *status,
                });
                false
            } else {
                true
            }
        });
    }
}
