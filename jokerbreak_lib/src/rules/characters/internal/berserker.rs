use crate::rules::cards::{Card, CardType};
use crate::rules::characters::{CharacterData, PassiveTrigger};
use crate::rules::events::GameEvent;
use crate::rules::player::Player;
use crate::rules::status::StatusEffect;

pub(in crate::rules::characters) static BERSERKER: CharacterData = CharacterData {
    name: "Berserker",
    max_hp: 20,
    jkp_cost: 8,
    passive,
    skill,
    joker,
};

/// Battle Instinct: every attack-mode blank hit that lands grants 1 JKP.
fn passive(
    owner: &mut Player,
    _opponent: &mut Player,
    trigger: PassiveTrigger,
    card: &Card,
    log: &mut Vec<GameEvent>,
) {
    if trigger == PassiveTrigger::AttackHit && card.card_type == CardType::Blank {
        log.push(GameEvent::PassiveTriggered { player: owner.pos });
        owner.add_jkp(1, log);
    }
}

/// Twin Strike: hits twice for the card value, then leaves a one-hit wound.
fn skill(_owner: &mut Player, opponent: &mut Player, card_value: i32, log: &mut Vec<GameEvent>) {
    opponent.receive_damage(card_value, log);
    opponent.receive_damage(card_value, log);
    opponent.add_status(
        StatusEffect::Wound {
            per_hit: 1,
            remaining: 1,
        },
        log,
    );
}

/// Herculean Rage: a long-lived wound followed by a heavy blow. The wound
/// lands first, so it already reacts to the blow itself.
fn joker(_owner: &mut Player, opponent: &mut Player, log: &mut Vec<GameEvent>) {
    opponent.add_status(
        StatusEffect::Wound {
            per_hit: 1,
            remaining: 20,
        },
        log,
    );
    opponent.receive_damage(10, log);
}
