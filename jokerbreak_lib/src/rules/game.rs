use crate::rules::cards::{Card, CardMode, CardType};
use crate::rules::characters::{CharacterId, PassiveTrigger};
use crate::rules::events::GameEvent;
use crate::rules::player::Player;
use crate::rules::states::{PlayerStateView, PlayersData, StateView};
use crate::rules::{PlayerPos, TurnPhase};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Damage taken for losing with a spell break card.
const BREAK_FAILURE_PENALTY: i32 = 1;

/// A submitted choice the resolver refuses to act on. Nothing has been
/// mutated when this is returned; the caller re-requests a legal choice.
#[derive(Error, Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum IllegalChoice {
    #[error("hand index {index} is out of range")]
    OutOfRange { player: PlayerPos, index: usize },
    #[error("the joker costs {cost} JKP but only {jkp} is available")]
    UnaffordableJoker {
        player: PlayerPos,
        jkp: i32,
        cost: i32,
    },
}

impl IllegalChoice {
    pub fn player(&self) -> PlayerPos {
        match self {
            IllegalChoice::OutOfRange { player, .. } => *player,
            IllegalChoice::UnaffordableJoker { player, .. } => *player,
        }
    }
}

enum Outcome {
    Draw,
    Winner {
        pos: PlayerPos,
        /// Set when a spell break lost to a non-joker card; the loser takes
        /// the penalty before the winning effect.
        break_failure: bool,
    },
}

/// Per-match turn engine. One instance per match, no process-wide state;
/// callers drive `start_turn` / `resolve_battle` / `end_turn` in order from
/// a single logical thread.
pub struct Game {
    players: PlayersData<Player>,
    turn: u32,
    phase: TurnPhase,
}

impl Game {
    pub fn new(p1_character: CharacterId, p2_character: CharacterId) -> Self {
        Self {
            players: PlayersData::new(
                Player::new(PlayerPos::P1, p1_character),
                Player::new(PlayerPos::P2, p2_character),
            ),
            turn: 1,
            phase: TurnPhase::TurnStart,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn player(&self, pos: PlayerPos) -> &Player {
        &self.players[pos]
    }

    pub fn player_mut(&mut self, pos: PlayerPos) -> &mut Player {
        &mut self.players[pos]
    }

    /// Deals both hands and opens the choice window.
    pub fn start_turn(&mut self) -> Vec<GameEvent> {
        let mut log = vec![GameEvent::TurnStarted { turn: self.turn }];
        for pos in [PlayerPos::P1, PlayerPos::P2] {
            self.players[pos].deal_hand();
            log.push(GameEvent::HandDealt { player: pos });
        }
        self.phase = TurnPhase::AwaitingChoices;
        log
    }

    /// Whether the card at `index` may be submitted by `pos`. Never mutates
    /// any state, whatever the outcome.
    pub fn playable(&self, pos: PlayerPos, index: usize) -> Result<(), IllegalChoice> {
        let player = &self.players[pos];
        let card = player
            .hand
            .get(index)
            .ok_or(IllegalChoice::OutOfRange { player: pos, index })?;

        let cost = player.data().jkp_cost;
        if card.card_type == CardType::Joker && player.jkp < cost {
            return Err(IllegalChoice::UnaffordableJoker {
                player: pos,
                jkp: player.jkp,
                cost,
            });
        }
        Ok(())
    }

    /// Flips a blank card between attack and defense while it is unplayed.
    /// Returns the new mode, or `None` when the selection is not a blank
    /// card (a no-op, not an error).
    pub fn toggle_card_mode(&mut self, pos: PlayerPos, index: usize) -> Option<CardMode> {
        let card = self.players[pos].hand.get_mut(index)?;
        if card.toggle_mode() {
            Some(card.mode)
        } else {
            None
        }
    }

    /// Resolves one turn from the two submitted hand indices.
    ///
    /// Both choices are validated before anything is touched; a rejection
    /// leaves the turn unconsumed so the offending seat can submit again.
    pub fn resolve_battle(
        &mut self,
        p1_index: usize,
        p2_index: usize,
    ) -> Result<Vec<GameEvent>, IllegalChoice> {
        self.playable(PlayerPos::P1, p1_index)?;
        self.playable(PlayerPos::P2, p2_index)?;
        self.phase = TurnPhase::Resolving;

        let c1 = self.players[PlayerPos::P1].hand[p1_index];
        let c2 = self.players[PlayerPos::P2].hand[p2_index];

        let mut log = vec![GameEvent::Matchup {
            p1_card: c1,
            p2_card: c2,
        }];

        match decide_winner(&c1, &c2) {
            Outcome::Draw => log.push(GameEvent::Draw),
            Outcome::Winner { pos, break_failure } => {
                log.push(GameEvent::Winner { player: pos });

                let winning_card = if pos == PlayerPos::P1 { c1 } else { c2 };
                let (winner, loser) = self.players.pair_mut(pos);

                if break_failure {
                    log.push(GameEvent::BreakFailure { player: loser.pos });
                    loser.receive_damage(BREAK_FAILURE_PENALTY, &mut log);
                }

                apply_card_effect(winner, loser, &winning_card, &mut log);
            }
        }

        self.phase = TurnPhase::TurnEnd;
        Ok(log)
    }

    /// Advances resources, ticks statuses and moves on to the next turn.
    pub fn end_turn(&mut self) -> Vec<GameEvent> {
        let mut log = Vec::new();
        for pos in [PlayerPos::P1, PlayerPos::P2] {
            self.players[pos].add_jkp(1, &mut log);
        }
        for pos in [PlayerPos::P1, PlayerPos::P2] {
            self.players[pos].run_turn_end_statuses(&mut log);
        }
        log.push(GameEvent::TurnEnded { turn: self.turn });
        self.turn += 1;
        self.phase = TurnPhase::TurnStart;
        log
    }

    /// Snapshot for one seat. The other seat's hand stays hidden.
    pub fn state_view(&self, viewed_from: PlayerPos) -> StateView {
        let view =
            |pos: PlayerPos| PlayerStateView::from_player(&self.players[pos], pos == viewed_from);
        StateView {
            turn: self.turn,
            phase: self.phase,
            players: PlayersData::new(view(PlayerPos::P1), view(PlayerPos::P2)),
        }
    }
}

/// Winner determination, in strict priority order: the joker counter first,
/// then break failure, then the numeric comparison with its defense
/// tie-break.
fn decide_winner(c1: &Card, c2: &Card) -> Outcome {
    use CardType::{Joker, SpellBreak};

    if c1.card_type == SpellBreak && c2.card_type == Joker {
        return Outcome::Winner {
            pos: PlayerPos::P1,
            break_failure: false,
        };
    }
    if c2.card_type == SpellBreak && c1.card_type == Joker {
        return Outcome::Winner {
            pos: PlayerPos::P2,
            break_failure: false,
        };
    }

    // A spell break against anything but a joker loses with the penalty.
    // Checked for P1 first, so a spell break mirror resolves as a P2 win.
    if c1.card_type == SpellBreak {
        return Outcome::Winner {
            pos: PlayerPos::P2,
            break_failure: true,
        };
    }
    if c2.card_type == SpellBreak {
        return Outcome::Winner {
            pos: PlayerPos::P1,
            break_failure: true,
        };
    }

    if c1.value != c2.value {
        let pos = if c1.value > c2.value {
            PlayerPos::P1
        } else {
            PlayerPos::P2
        };
        return Outcome::Winner {
            pos,
            break_failure: false,
        };
    }

    // Equal values: a lone defense side takes the tie.
    match (c1.is_defense(), c2.is_defense()) {
        (true, false) => Outcome::Winner {
            pos: PlayerPos::P1,
            break_failure: false,
        },
        (false, true) => Outcome::Winner {
            pos: PlayerPos::P2,
            break_failure: false,
        },
        _ => Outcome::Draw,
    }
}

fn apply_card_effect(
    winner: &mut Player,
    loser: &mut Player,
    card: &Card,
    log: &mut Vec<GameEvent>,
) {
    let data = winner.data();

    // The passive fires before the base effect, on attack-mode blank hits.
    if card.card_type == CardType::Blank && card.mode == CardMode::Attack {
        (data.passive)(winner, loser, PassiveTrigger::AttackHit, card, log);
    }

    match card.card_type {
        CardType::Blank => {
            if card.mode == CardMode::Attack {
                loser.receive_damage(card.value, log);
            }
            // A winning defense blank blocks and does nothing more.
        }
        CardType::Skill => (data.skill)(winner, loser, card.value, log),
        CardType::Joker => {
            winner.add_jkp(-data.jkp_cost, log);
            (data.joker)(winner, loser, log);
        }
        // Countering the joker is the whole effect.
        CardType::SpellBreak => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::status::StatusEffect;

    fn card(card_type: CardType, value: i32, mode: CardMode) -> Card {
        Card {
            card_type,
            value,
            mode,
        }
    }

    fn blank(value: i32, mode: CardMode) -> Card {
        card(CardType::Blank, value, mode)
    }

    fn skill(value: i32) -> Card {
        card(CardType::Skill, value, CardMode::Attack)
    }

    fn joker() -> Card {
        card(CardType::Joker, 14, CardMode::Attack)
    }

    fn spell_break() -> Card {
        card(CardType::SpellBreak, 0, CardMode::Attack)
    }

    /// Berserker vs Venom with both hands pinned to the two given cards.
    fn game_with(c1: Card, c2: Card) -> Game {
        let mut game = Game::new(CharacterId::Berserker, CharacterId::Venom);
        game.start_turn();
        game.player_mut(PlayerPos::P1).hand = vec![c1];
        game.player_mut(PlayerPos::P2).hand = vec![c2];
        game
    }

    #[test]
    fn higher_value_wins_regardless_of_mode() {
        let mut game = game_with(blank(3, CardMode::Defense), skill(9));
        let log = game.resolve_battle(0, 0).unwrap();
        assert!(log.contains(&GameEvent::Winner {
            player: PlayerPos::P2
        }));
    }

    #[test]
    fn defense_takes_equal_value_ties() {
        let mut game = game_with(blank(9, CardMode::Defense), skill(9));
        let log = game.resolve_battle(0, 0).unwrap();

        assert!(log.contains(&GameEvent::Winner {
            player: PlayerPos::P1
        }));
        // A winning defense blank deals no damage.
        assert_eq!(game.player(PlayerPos::P2).hp, 36);
    }

    #[test]
    fn equal_value_same_stance_is_a_draw_with_no_mutation() {
        let mut game = game_with(blank(6, CardMode::Attack), skill(6));
        let log = game.resolve_battle(0, 0).unwrap();

        assert!(log.contains(&GameEvent::Draw));
        assert_eq!(game.player(PlayerPos::P1).hp, 20);
        assert_eq!(game.player(PlayerPos::P2).hp, 36);
        assert_eq!(game.player(PlayerPos::P1).jkp, 0);
        assert_eq!(game.player(PlayerPos::P2).jkp, 0);
        assert!(game.player(PlayerPos::P1).status_list.is_empty());
        assert!(game.player(PlayerPos::P2).status_list.is_empty());
    }

    #[test]
    fn both_defense_ties_are_a_draw() {
        let mut game = game_with(blank(4, CardMode::Defense), blank(4, CardMode::Defense));
        let log = game.resolve_battle(0, 0).unwrap();
        assert!(log.contains(&GameEvent::Draw));
    }

    #[test]
    fn spell_break_counters_the_joker_without_penalty() {
        let mut game = game_with(spell_break(), joker());
        game.player_mut(PlayerPos::P2).jkp = 5;

        let log = game.resolve_battle(0, 0).unwrap();

        assert!(log.contains(&GameEvent::Winner {
            player: PlayerPos::P1
        }));
        assert!(!log.iter().any(|e| matches!(e, GameEvent::BreakFailure { .. })));
        // The counter itself has no effect; nobody is hurt and the joker
        // side keeps its resource.
        assert_eq!(game.player(PlayerPos::P1).hp, 20);
        assert_eq!(game.player(PlayerPos::P2).hp, 36);
        assert_eq!(game.player(PlayerPos::P2).jkp, 5);
    }

    #[test]
    fn spell_break_loses_to_anything_else_with_penalty() {
        let mut game = game_with(spell_break(), blank(5, CardMode::Attack));
        let log = game.resolve_battle(0, 0).unwrap();

        assert!(log.contains(&GameEvent::Winner {
            player: PlayerPos::P2
        }));
        assert!(log.contains(&GameEvent::BreakFailure {
            player: PlayerPos::P1
        }));
        // 1 penalty plus the winning blank's 5.
        assert_eq!(game.player(PlayerPos::P1).hp, 20 - 1 - 5);
    }

    #[test]
    fn penalty_lands_before_the_winning_effect() {
        let mut game = game_with(spell_break(), blank(5, CardMode::Attack));
        game.player_mut(PlayerPos::P1).hp = 1;

        let log = game.resolve_battle(0, 0).unwrap();

        let damage: Vec<(i32, i32)> = log
            .iter()
            .filter_map(|e| match e {
                GameEvent::Damage {
                    player: PlayerPos::P1,
                    amount,
                    hp_after,
                } => Some((*amount, *hp_after)),
                _ => None,
            })
            .collect();
        assert_eq!(damage, vec![(1, 0), (5, 0)]);
    }

    #[test]
    fn spell_break_mirror_resolves_as_a_p2_win() {
        // Both sides breaking falls through to the break-failure branch,
        // which checks P1 first.
        let mut game = game_with(spell_break(), spell_break());
        let log = game.resolve_battle(0, 0).unwrap();

        assert!(log.contains(&GameEvent::Winner {
            player: PlayerPos::P2
        }));
        assert_eq!(game.player(PlayerPos::P1).hp, 20 - 1);
        // The winning spell break has no effect of its own.
        assert_eq!(game.player(PlayerPos::P2).hp, 36);
    }

    #[test]
    fn joker_mirror_is_a_draw() {
        let mut game = game_with(joker(), joker());
        game.player_mut(PlayerPos::P1).jkp = 8;

        let log = game.resolve_battle(0, 0).unwrap();
        assert!(log.contains(&GameEvent::Draw));
        assert_eq!(game.player(PlayerPos::P1).jkp, 8);
    }

    #[test]
    fn unaffordable_joker_is_rejected_without_mutation() {
        let mut game = game_with(joker(), skill(4));
        game.player_mut(PlayerPos::P1).jkp = 3;

        let err = game.resolve_battle(0, 0).unwrap_err();
        assert_eq!(
            err,
            IllegalChoice::UnaffordableJoker {
                player: PlayerPos::P1,
                jkp: 3,
                cost: 8,
            }
        );
        assert_eq!(game.player(PlayerPos::P1).hp, 20);
        assert_eq!(game.player(PlayerPos::P2).hp, 36);
        assert_eq!(game.player(PlayerPos::P1).jkp, 3);
        // The turn is not consumed.
        assert_eq!(game.phase(), TurnPhase::AwaitingChoices);
    }

    #[test]
    fn zero_cost_joker_is_always_playable() {
        let game = game_with(skill(4), joker());
        assert!(game.playable(PlayerPos::P2, 0).is_ok());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let game = game_with(skill(4), skill(5));
        assert_eq!(
            game.playable(PlayerPos::P1, 7),
            Err(IllegalChoice::OutOfRange {
                player: PlayerPos::P1,
                index: 7,
            })
        );
    }

    #[test]
    fn playable_never_mutates() {
        let mut game = game_with(joker(), skill(5));
        game.player_mut(PlayerPos::P1).jkp = 3;

        let hand_before = game.player(PlayerPos::P1).hand.clone();
        let _ = game.playable(PlayerPos::P1, 0);
        let _ = game.playable(PlayerPos::P1, 9);

        assert_eq!(game.player(PlayerPos::P1).hand, hand_before);
        assert_eq!(game.player(PlayerPos::P1).jkp, 3);
        assert_eq!(game.player(PlayerPos::P1).hp, 20);
    }

    #[test]
    fn winning_joker_spends_exactly_its_cost() {
        let mut game = game_with(joker(), skill(4));
        game.player_mut(PlayerPos::P1).jkp = 9;

        game.resolve_battle(0, 0).unwrap();
        assert_eq!(game.player(PlayerPos::P1).jkp, 1);
    }

    #[test]
    fn toggle_mode_is_a_noop_on_non_blank_cards() {
        let mut game = game_with(skill(4), blank(4, CardMode::Attack));

        assert_eq!(game.toggle_card_mode(PlayerPos::P1, 0), None);
        assert_eq!(
            game.toggle_card_mode(PlayerPos::P2, 0),
            Some(CardMode::Defense)
        );
        assert_eq!(game.toggle_card_mode(PlayerPos::P1, 5), None);
    }

    #[test]
    fn berserker_passive_grants_jkp_on_blank_attack_hits() {
        let mut game = game_with(blank(7, CardMode::Attack), skill(3));
        let log = game.resolve_battle(0, 0).unwrap();

        assert!(log.contains(&GameEvent::PassiveTriggered {
            player: PlayerPos::P1
        }));
        assert_eq!(game.player(PlayerPos::P1).jkp, 1);
        assert_eq!(game.player(PlayerPos::P2).hp, 36 - 7);
    }

    #[test]
    fn venom_passive_poisons_on_blank_attack_hits() {
        let mut game = game_with(skill(3), blank(7, CardMode::Attack));
        game.resolve_battle(0, 0).unwrap();

        assert_eq!(
            game.player(PlayerPos::P1).status_list,
            vec![StatusEffect::Poison { stacks: 2 }]
        );
        assert_eq!(game.player(PlayerPos::P1).hp, 20 - 7);
    }

    #[test]
    fn passives_stay_silent_on_skill_wins() {
        let mut game = game_with(skill(9), skill(3));
        let log = game.resolve_battle(0, 0).unwrap();
        assert!(!log
            .iter()
            .any(|e| matches!(e, GameEvent::PassiveTriggered { .. })));
    }

    #[test]
    fn end_turn_grants_jkp_and_advances_the_counter() {
        let mut game = Game::new(CharacterId::Berserker, CharacterId::Venom);
        game.start_turn();
        assert_eq!(game.turn(), 1);

        game.end_turn();
        assert_eq!(game.turn(), 2);
        assert_eq!(game.phase(), TurnPhase::TurnStart);
        assert_eq!(game.player(PlayerPos::P1).jkp, 1);
        assert_eq!(game.player(PlayerPos::P2).jkp, 1);
    }

    #[test]
    fn start_turn_deals_fresh_hands_each_time() {
        let mut game = Game::new(CharacterId::Berserker, CharacterId::Venom);
        game.start_turn();
        game.player_mut(PlayerPos::P1).hand.clear();

        game.end_turn();
        let log = game.start_turn();

        assert_eq!(game.player(PlayerPos::P1).hand.len(), 5);
        assert!(log.contains(&GameEvent::HandDealt {
            player: PlayerPos::P1
        }));
        assert!(log.contains(&GameEvent::TurnStarted { turn: 2 }));
    }
}
