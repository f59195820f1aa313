use crate::rules::cards::{Card, CardType};
use crate::rules::characters::{CharacterData, PassiveTrigger};
use crate::rules::events::GameEvent;
use crate::rules::player::Player;
use crate::rules::status::StatusEffect;

pub(in crate::rules::characters) static VENOM: CharacterData = CharacterData {
    name: "Venom",
    max_hp: 36,
    jkp_cost: 0,
    passive,
    skill,
    joker,
};

/// Venom Claw: attack-mode blank hits smear 2 poison stacks on the target.
fn passive(
    owner: &mut Player,
    opponent: &mut Player,
    trigger: PassiveTrigger,
    card: &Card,
    log: &mut Vec<GameEvent>,
) {
    if trigger == PassiveTrigger::AttackHit && card.card_type == CardType::Blank {
        log.push(GameEvent::PassiveTriggered { player: owner.pos });
        opponent.add_status(StatusEffect::Poison { stacks: 2 }, log);
    }
}

/// Poison Mist: no damage, just 5 poison stacks.
fn skill(_owner: &mut Player, opponent: &mut Player, _card_value: i32, log: &mut Vec<GameEvent>) {
    opponent.add_status(StatusEffect::Poison { stacks: 5 }, log);
}

/// Overdose: converts half the target's poison stacks into damage and
/// recovers half of that. The stacks themselves are left untouched; without
/// poison on the target this does nothing.
fn joker(owner: &mut Player, opponent: &mut Player, log: &mut Vec<GameEvent>) {
    let stacks = opponent.status_list.iter().find_map(|status| match status {
        StatusEffect::Poison { stacks } => Some(*stacks),
        _ => None,
    });

    if let Some(stacks) = stacks {
        let damage = stacks / 2;
        let heal = damage / 2;
        opponent.receive_damage(damage, log);
        owner.heal(heal, log);
    }
}
