//! Universally quantified resolution properties.

use jokerbreak_lib::rules::cards::{Card, CardMode, CardType};
use jokerbreak_lib::rules::characters::CharacterId;
use jokerbreak_lib::rules::events::GameEvent;
use jokerbreak_lib::rules::game::Game;
use jokerbreak_lib::rules::player::Player;
use jokerbreak_lib::rules::status::StatusEffect;
use jokerbreak_lib::rules::PlayerPos;
use proptest::prelude::*;

fn blank(value: i32, defense: bool) -> Card {
    Card {
        card_type: CardType::Blank,
        value,
        mode: if defense {
            CardMode::Defense
        } else {
            CardMode::Attack
        },
    }
}

fn pinned_game(p1_card: Card, p2_card: Card) -> Game {
    let mut game = Game::new(CharacterId::Berserker, CharacterId::Venom);
    game.start_turn();
    game.player_mut(PlayerPos::P1).hand = vec![p1_card];
    game.player_mut(PlayerPos::P2).hand = vec![p2_card];
    game
}

fn winner_of(log: &[GameEvent]) -> Option<PlayerPos> {
    log.iter().find_map(|event| match event {
        GameEvent::Winner { player } => Some(*player),
        _ => None,
    })
}

proptest! {
    /// Higher value wins no matter how the modes are oriented.
    #[test]
    fn higher_value_always_wins(
        a in 1..=13i32,
        b in 1..=13i32,
        p1_defense in any::<bool>(),
        p2_defense in any::<bool>(),
    ) {
        prop_assume!(a != b);

        let mut game = pinned_game(blank(a, p1_defense), blank(b, p2_defense));
        let log = game.resolve_battle(0, 0).unwrap();

        let expected = if a > b { PlayerPos::P1 } else { PlayerPos::P2 };
        prop_assert_eq!(winner_of(&log), Some(expected));
    }

    /// On equal values, a lone defense side takes the tie.
    #[test]
    fn lone_defense_takes_equal_value_ties(value in 1..=13i32, defender_is_p1 in any::<bool>()) {
        let mut game = pinned_game(blank(value, defender_is_p1), blank(value, !defender_is_p1));
        let log = game.resolve_battle(0, 0).unwrap();

        let expected = if defender_is_p1 { PlayerPos::P1 } else { PlayerPos::P2 };
        prop_assert_eq!(winner_of(&log), Some(expected));
    }

    /// Equal values and equal stances draw, with zero state mutation.
    #[test]
    fn shared_stance_ties_draw_without_mutation(value in 1..=13i32, defense in any::<bool>()) {
        let mut game = pinned_game(blank(value, defense), blank(value, defense));
        let log = game.resolve_battle(0, 0).unwrap();

        prop_assert!(log.contains(&GameEvent::Draw));
        prop_assert_eq!(winner_of(&log), None);
        prop_assert_eq!(game.player(PlayerPos::P1).hp, 20);
        prop_assert_eq!(game.player(PlayerPos::P2).hp, 36);
        prop_assert_eq!(game.player(PlayerPos::P1).jkp, 0);
        prop_assert_eq!(game.player(PlayerPos::P2).jkp, 0);
        prop_assert!(game.player(PlayerPos::P1).status_list.is_empty());
        prop_assert!(game.player(PlayerPos::P2).status_list.is_empty());
    }

    /// Poison always merges into a single additive instance.
    #[test]
    fn poison_merges_additively(first in 1..=50i32, second in 1..=50i32) {
        let mut player = Player::new(PlayerPos::P1, CharacterId::Venom);
        let mut log = Vec::new();

        player.add_status(StatusEffect::Poison { stacks: first }, &mut log);
        player.add_status(StatusEffect::Poison { stacks: second }, &mut log);

        prop_assert_eq!(
            player.status_list,
            vec![StatusEffect::Poison { stacks: first + second }]
        );
    }

    /// hp stays inside [0, max_hp] under any damage/heal sequence.
    #[test]
    fn hp_stays_clamped(amounts in prop::collection::vec((any::<bool>(), 0..=40i32), 1..20)) {
        let mut player = Player::new(PlayerPos::P2, CharacterId::Venom);
        let mut log = Vec::new();
        let max_hp = player.data().max_hp;

        for (is_heal, amount) in amounts {
            if is_heal {
                player.heal(amount, &mut log);
            } else {
                player.receive_damage(amount, &mut log);
            }
            prop_assert!((0..=max_hp).contains(&player.hp));
        }
    }
}
