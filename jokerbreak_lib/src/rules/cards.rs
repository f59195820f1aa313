use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardType {
    Blank,
    Skill,
    Joker,
    SpellBreak,
}

/// Orientation of a blank card. Other card types always count as attack.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardMode {
    Attack,
    Defense,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Card {
    pub card_type: CardType,
    /// Strength used in the numeric comparison. Rolled exactly once at
    /// construction and never recomputed.
    pub value: i32,
    pub mode: CardMode,
}

impl Card {
    pub fn new(card_type: CardType) -> Self {
        let value = match card_type {
            CardType::Blank | CardType::Skill => rand::thread_rng().gen_range(1..=13),
            CardType::Joker => 14,
            // Spell break wins or loses by type alone, never by value.
            CardType::SpellBreak => 0,
        };

        Self {
            card_type,
            value,
            mode: CardMode::Attack,
        }
    }

    /// Flips attack/defense on a blank card. Returns false (and changes
    /// nothing) for every other type.
    pub fn toggle_mode(&mut self) -> bool {
        if self.card_type != CardType::Blank {
            return false;
        }
        self.mode = match self.mode {
            CardMode::Attack => CardMode::Defense,
            CardMode::Defense => CardMode::Attack,
        };
        true
    }

    pub fn is_defense(&self) -> bool {
        self.mode == CardMode::Defense
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_str = match self.card_type {
            CardType::Blank => "BLANK",
            CardType::Skill => "SKILL",
            CardType::Joker => "JOKER",
            CardType::SpellBreak => "BREAK",
        };
        let mode_str = match (self.card_type, self.mode) {
            (CardType::Blank, CardMode::Attack) => "(atk)",
            (CardType::Blank, CardMode::Defense) => "(def)",
            _ => "",
        };
        if self.card_type == CardType::SpellBreak {
            write!(f, "[{type_str}{mode_str}:∞]")
        } else {
            write!(f, "[{type_str}{mode_str}:{}]", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolled_values_stay_in_range() {
        for _ in 0..200 {
            let blank = Card::new(CardType::Blank);
            let skill = Card::new(CardType::Skill);
            assert!((1..=13).contains(&blank.value));
            assert!((1..=13).contains(&skill.value));
        }
    }

    #[test]
    fn fixed_values_for_joker_and_break() {
        assert_eq!(Card::new(CardType::Joker).value, 14);
        assert_eq!(Card::new(CardType::SpellBreak).value, 0);
    }

    #[test]
    fn new_cards_start_in_attack_mode() {
        assert_eq!(Card::new(CardType::Blank).mode, CardMode::Attack);
        assert_eq!(Card::new(CardType::Skill).mode, CardMode::Attack);
    }

    #[test]
    fn toggle_only_affects_blank_cards() {
        let mut blank = Card::new(CardType::Blank);
        assert!(blank.toggle_mode());
        assert_eq!(blank.mode, CardMode::Defense);
        assert!(blank.toggle_mode());
        assert_eq!(blank.mode, CardMode::Attack);

        let mut skill = Card::new(CardType::Skill);
        assert!(!skill.toggle_mode());
        assert_eq!(skill.mode, CardMode::Attack);

        let mut joker = Card::new(CardType::Joker);
        assert!(!joker.toggle_mode());
        assert_eq!(joker.mode, CardMode::Attack);
    }

    #[test]
    fn display_shows_mode_for_blanks_and_infinity_for_break() {
        let mut blank = Card::new(CardType::Blank);
        blank.value = 7;
        assert_eq!(blank.to_string(), "[BLANK(atk):7]");
        blank.toggle_mode();
        assert_eq!(blank.to_string(), "[BLANK(def):7]");

        let spell_break = Card::new(CardType::SpellBreak);
        assert_eq!(spell_break.to_string(), "[BREAK:∞]");
    }
}
