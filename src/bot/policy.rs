//! The scripted opponent's turn.
//!
//! Plays the current player's whole turn through the public game
//! operations: trade, deploy, attack loop, fortify, end turn. Resumes from
//! whatever phase the turn is in, so it can also finish a partly played
//! turn.

use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::board::PlayerId;
use crate::game::{Game, PhaseKind, RuleError};

use super::heuristic::{self, TRADE_THRESHOLD};
use super::log::BotAction;

/// What one bot turn did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    pub trades: u32,
    pub deployed: u32,
    pub attacks: usize,
    pub conquests: usize,
    pub fortified: bool,
    pub ended_turn: bool,
}

/// Plays the current player's turn to completion.
pub fn play_turn(game: &mut Game) -> TurnSummary {
    let me = game.current_player();
    game.bot_log_mut().clear();
    let mut summary = TurnSummary::default();
    info!(player = %me, turn = game.turn(), "bot turn");

    if game.phase_kind() == PhaseKind::Deploy {
        trade_cards(game, me, &mut summary);
        deploy(game, me, &mut summary);
        if !enter_phase(game) {
            return summary;
        }
    }

    if let Some(pending) = game.pending_move() {
        match game.move_after_conquest(me, pending.max) {
            Ok(_) => record(game, BotAction::Move {
                from: pending.from,
                to: pending.to,
                count: pending.max,
            }),
            Err(e) => {
                reject(game, e);
                return summary;
            }
        }
    }

    if game.phase_kind() == PhaseKind::Attack {
        attack_loop(game, me, &mut summary);
        if game.is_over() || !enter_phase(game) {
            return summary;
        }
    }

    if game.phase_kind() == PhaseKind::Fortify {
        fortify(game, me, &mut summary);
        record(game, BotAction::EndTurn);
        match game.next_phase() {
            Ok(_) => summary.ended_turn = true,
            Err(e) => reject(game, e),
        }
    }

    summary
}

fn trade_cards(game: &mut Game, me: PlayerId, summary: &mut TurnSummary) {
    while game.hand(me).len() >= TRADE_THRESHOLD {
        let Some(indices) = heuristic::find_trade(game.hand(me)) else {
            break;
        };
        let cards = indices.iter().map(|&i| game.hand(me)[i]).collect();
        match game.trade_in_cards(me, indices) {
            Ok(bonus) => {
                summary.trades += 1;
                record(game, BotAction::Trade { cards, bonus });
            }
            Err(e) => {
                reject(game, e);
                break;
            }
        }
    }
}

fn deploy(game: &mut Game, me: PlayerId, summary: &mut TurnSummary) {
    let count = game.reinforcements_remaining();
    if count == 0 {
        return;
    }
    let target = match heuristic::deploy_target(game.board(), me) {
        Some(t) => t,
        None => {
            let owned = game.board().territories_of(me);
            match owned.choose(game.rng()) {
                Some(&t) => t,
                None => return,
            }
        }
    };
    match game.deploy(me, target, count) {
        Ok(_) => {
            summary.deployed += count;
            record(game, BotAction::Deploy { territory: target, count });
        }
        Err(e) => reject(game, e),
    }
}

fn attack_loop(game: &mut Game, me: PlayerId, summary: &mut TurnSummary) {
    let limit = game.config().bot_attack_limit;
    for _ in 0..limit {
        if game.phase_kind() != PhaseKind::Attack {
            break;
        }
        let Some(choice) = heuristic::best_attack(game.board(), me) else {
            debug!(player = %me, "no attack worth making");
            break;
        };
        let outcome = match game.attack(me, choice.from, choice.to, choice.dice) {
            Ok(outcome) => outcome,
            Err(e) => {
                reject(game, e);
                break;
            }
        };
        summary.attacks += 1;
        record(game, BotAction::Attack {
            from: outcome.from,
            to: outcome.to,
            dice: choice.dice,
            attacker_rolls: outcome.attacker_rolls.clone(),
            defender_rolls: outcome.defender_rolls.clone(),
            attacker_losses: outcome.attacker_losses,
            defender_losses: outcome.defender_losses,
            conquered: outcome.conquered,
        });
        if !outcome.conquered {
            continue;
        }
        summary.conquests += 1;

        if outcome.game_over {
            // The engine already advanced the committed armies.
            record(game, BotAction::Move {
                from: outcome.from,
                to: outcome.to,
                count: choice.dice,
            });
            break;
        }
        if let Some(pending) = outcome.pending_move {
            match game.move_after_conquest(me, pending.max) {
                Ok(_) => record(game, BotAction::Move {
                    from: pending.from,
                    to: pending.to,
                    count: pending.max,
                }),
                Err(e) => {
                    reject(game, e);
                    break;
                }
            }
        }
    }
}

fn fortify(game: &mut Game, me: PlayerId, summary: &mut TurnSummary) {
    let Some(plan) = heuristic::fortify_plan(game.board(), me) else {
        return;
    };
    match game.fortify(me, plan.from, plan.to, plan.count) {
        Ok(()) => {
            summary.fortified = true;
            record(game, BotAction::Fortify {
                from: plan.from,
                to: plan.to,
                count: plan.count,
            });
        }
        Err(e) => reject(game, e),
    }
}

/// Advances one phase and logs the phase entered. Returns false if the
/// engine refused.
fn enter_phase(game: &mut Game) -> bool {
    match game.next_phase() {
        Ok(phase) => {
            record(game, BotAction::Phase { phase });
            true
        }
        Err(e) => {
            reject(game, e);
            false
        }
    }
}

fn record(game: &mut Game, action: BotAction) {
    debug!(?action, "bot");
    game.bot_log_mut().push(action);
}

fn reject(game: &mut Game, err: RuleError) {
    warn!(%err, "bot action rejected");
    game.bot_log_mut().push(BotAction::Rejected { reason: err.to_string() });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Territory};
    use crate::game::GameConfig;
    use crate::bot::LoggedAction;
    use Territory::*;

    fn manual() -> GameConfig {
        GameConfig {
            seed: Some(21),
            auto_bot_turn: false,
            ..GameConfig::default()
        }
    }

    /// Walks the human through an idle turn so the bot is to move.
    fn pass_human_turn(game: &mut Game) {
        let n = game.reinforcements_remaining();
        let t = game.board().territories_of(PlayerId::Human)[0];
        game.deploy(PlayerId::Human, t, n).unwrap();
        game.next_phase().unwrap();
        game.next_phase().unwrap();
        game.next_phase().unwrap();
        assert_eq!(game.current_player(), PlayerId::Bot);
    }

    fn kinds(log: &[LoggedAction]) -> Vec<&'static str> {
        log.iter()
            .map(|e| match e.action {
                BotAction::Trade { .. } => "trade",
                BotAction::Deploy { .. } => "deploy",
                BotAction::Phase { .. } => "phase",
                BotAction::Attack { .. } => "attack",
                BotAction::Move { .. } => "move",
                BotAction::Fortify { .. } => "fortify",
                BotAction::EndTurn => "end",
                BotAction::Rejected { .. } => "rejected",
            })
            .collect()
    }

    #[test]
    fn idle_turn_reaches_fortify_and_ends() {
        // The bot holds one well-defended corner with no attack it can win:
        // every human neighbour is stronger than anything the bot can field.
        let mut board = BoardState::uniform(PlayerId::Human);
        board.set_owner(Argentina, PlayerId::Bot);
        board.set_armies(Peru, 50);
        board.set_armies(Brazil, 50);
        let mut game = Game::with_board(manual(), board);
        pass_human_turn(&mut game);

        let summary = game.run_bot_turn().unwrap();
        assert_eq!(summary.attacks, 0);
        assert!(summary.ended_turn);
        assert_eq!(summary.deployed, 3);
        assert_eq!(game.current_player(), PlayerId::Human);
        assert_eq!(game.phase_kind(), PhaseKind::Deploy);

        let log = game.drain_bot_actions();
        assert_eq!(kinds(&log), vec!["deploy", "phase", "phase", "end"]);
        assert!(matches!(log[2].action, BotAction::Phase { phase: PhaseKind::Fortify }));
        assert_eq!(game.board().armies_at(Argentina), 4);
    }

    #[test]
    fn log_holds_only_the_latest_bot_turn() {
        let mut board = BoardState::uniform(PlayerId::Human);
        board.set_owner(Argentina, PlayerId::Bot);
        board.set_armies(Peru, 50);
        board.set_armies(Brazil, 50);
        let mut game = Game::with_board(manual(), board);

        pass_human_turn(&mut game);
        game.run_bot_turn().unwrap();
        assert_eq!(game.bot_log().len(), 4);

        // Nothing drains the log between the two bot turns.
        pass_human_turn(&mut game);
        game.run_bot_turn().unwrap();
        let log = game.drain_bot_actions();
        assert_eq!(kinds(&log), vec!["deploy", "phase", "phase", "end"]);
        assert_eq!(game.board().armies_at(Argentina), 7);
    }

    #[test]
    fn bot_attacks_weak_neighbour() {
        let mut board = BoardState::uniform(PlayerId::Human);
        board.set_owner(Kamchatka, PlayerId::Bot);
        board.set_armies(Kamchatka, 5);
        let mut game = Game::with_board(manual(), board);
        pass_human_turn(&mut game);
        let summary = game.run_bot_turn().unwrap();
        assert!(summary.attacks >= 1);
        assert!(summary.ended_turn);

        let log = game.drain_bot_actions();
        assert!(log.iter().all(|e| !matches!(e.action, BotAction::Rejected { .. })));
        let moves = log.iter().filter(|e| matches!(e.action, BotAction::Move { .. })).count();
        assert_eq!(moves, summary.conquests);
        assert_eq!(log.last().map(|e| &e.action), Some(&BotAction::EndTurn));
        assert!(game.board().armies.iter().all(|&a| a >= 1));
    }

    #[test]
    fn attack_loop_respects_limit() {
        let mut board = BoardState::uniform(PlayerId::Human);
        board.set_owner(Kamchatka, PlayerId::Bot);
        board.set_armies(Kamchatka, 200);
        for t in [Alaska, Yakutsk, Irkutsk, Mongolia, Japan] {
            board.set_armies(t, 150);
        }
        let config = GameConfig {
            bot_attack_limit: 4,
            ..manual()
        };
        let mut game = Game::with_board(config, board);
        pass_human_turn(&mut game);
        let summary = game.run_bot_turn().unwrap();
        assert_eq!(summary.attacks, 4);
        assert!(summary.ended_turn);
    }

    #[test]
    fn trades_when_hand_is_full() {
        let mut board = BoardState::uniform(PlayerId::Human);
        board.set_owner(Argentina, PlayerId::Bot);
        board.set_armies(Peru, 50);
        board.set_armies(Brazil, 50);
        let mut game = Game::with_board(manual(), board);
        pass_human_turn(&mut game);
        *game.hand_mut(PlayerId::Bot) = vec![
            crate::cards::Card::for_territory(Alaska),
            crate::cards::Card::for_territory(Alberta),
            crate::cards::Card::for_territory(Venezuela),
            crate::cards::Card::Wildcard,
            crate::cards::Card::for_territory(Greenland),
        ];
        let summary = game.run_bot_turn().unwrap();
        assert_eq!(summary.trades, 1);
        assert_eq!(summary.deployed, 3 + 4);
        assert_eq!(game.hand(PlayerId::Bot).len(), 2);
    }
}
