//! Interactive session: one game driven by text commands from the human.
//!
//! Commands are executed as the human player. Placing the last
//! reinforcement moves the game straight into the attack phase, so the
//! player never has to type `next` after deploying.

use tracing::{debug, warn};

use crate::board::PlayerId;
use crate::game::{Game, GameConfig, PhaseKind};
use crate::protocol::{parse_command, Command, Response};

pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Session {
            game: Game::new(config),
        }
    }

    /// Wraps an existing game.
    pub fn with_game(game: Game) -> Self {
        Session { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Parses and executes one input line. Returns None for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        match parse_command(line) {
            Ok(None) => None,
            Ok(Some(cmd)) => Some(self.execute(cmd)),
            Err(e) => Some(Response::error(e)),
        }
    }

    /// Executes a parsed command as the human player.
    pub fn execute(&mut self, cmd: Command) -> Response {
        debug!(?cmd, "command");
        let me = PlayerId::Human;
        match cmd {
            Command::Deploy { territory, count } => match self.game.deploy(me, territory, count) {
                Ok(remaining) => {
                    if remaining == 0 {
                        if let Err(e) = self.game.next_phase() {
                            warn!(%e, "auto-advance refused");
                        }
                    }
                    Response::Deployed {
                        territory,
                        count,
                        remaining,
                        phase: self.game.phase_kind(),
                    }
                }
                Err(e) => Response::error(e),
            },
            Command::Attack { from, to, dice } => match self.game.attack(me, from, to, dice) {
                Ok(outcome) => Response::Attacked {
                    outcome,
                    winner: self.game.winner(),
                },
                Err(e) => Response::error(e),
            },
            Command::Move { count } => match self.game.move_after_conquest(me, count) {
                Ok(pending) => Response::Moved {
                    from: pending.from,
                    to: pending.to,
                    count,
                },
                Err(e) => Response::error(e),
            },
            Command::Fortify { from, to, count } => match self.game.fortify(me, from, to, count) {
                Ok(()) => Response::Fortified { from, to, count },
                Err(e) => Response::error(e),
            },
            Command::Trade { indices } => match self.game.trade_in_cards(me, indices) {
                Ok(bonus) => Response::Traded {
                    bonus,
                    reinforcements: self.game.reinforcements_remaining(),
                },
                Err(e) => Response::error(e),
            },
            Command::Next => self.next(),
            Command::Board => Response::Board {
                snapshot: Box::new(self.game.snapshot()),
            },
            Command::Status => Response::Status {
                snapshot: Box::new(self.game.snapshot()),
            },
            Command::Hand => Response::Hand {
                cards: self.game.hand(me).to_vec(),
                trade_bonus: self.game.trade_bonus(),
            },
            Command::State => Response::State {
                snapshot: Box::new(self.game.snapshot()),
            },
            Command::Log => Response::BotAction {
                entry: self.game.pop_bot_action(),
            },
            Command::Replay => Response::Replay {
                entries: self.game.drain_bot_actions(),
            },
            Command::Restart => {
                self.game.restart();
                Response::Restarted {
                    reinforcements: self.game.reinforcements_remaining(),
                }
            }
            Command::Bot => match self.game.run_bot_turn() {
                Ok(summary) => Response::BotTurn {
                    summary,
                    entries: self.game.drain_bot_actions(),
                },
                Err(e) => Response::error(e),
            },
            Command::Help => Response::help(),
            Command::Quit => Response::Bye,
        }
    }

    fn next(&mut self) -> Response {
        if self.game.current_player() != PlayerId::Human && self.game.phase_kind() != PhaseKind::GameOver {
            return Response::error(crate::game::RuleError::NotYourTurn {
                current: self.game.current_player(),
            });
        }
        match self.game.next_phase() {
            Ok(phase) => Response::Phase {
                phase,
                current_player: self.game.current_player(),
                reinforcements: self.game.reinforcements_remaining(),
                bot_actions: self.game.bot_log().len(),
                winner: self.game.winner(),
            },
            Err(e) => Response::error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(GameConfig::seeded(42))
    }

    #[test]
    fn blank_line_is_ignored() {
        assert!(session().handle_line("  ").is_none());
    }

    #[test]
    fn parse_errors_are_reported() {
        let r = session().handle_line("launch missiles").unwrap();
        assert!(r.is_error());
        assert!(r.to_string().contains("unknown command"));
    }

    #[test]
    fn deploying_everything_starts_attack() {
        let mut s = session();
        let t = s.game().board().territories_of(PlayerId::Human)[0];
        let n = s.game().reinforcements_remaining();
        let r = s.handle_line(&format!("deploy {} {}", t.abbr(), n)).unwrap();
        assert!(matches!(r, Response::Deployed { remaining: 0, phase: PhaseKind::Attack, .. }));
        assert_eq!(s.game().phase_kind(), PhaseKind::Attack);
    }

    #[test]
    fn last_of_split_deploy_advances_once() {
        let mut s = session();
        let t = s.game().board().territories_of(PlayerId::Human)[0];
        let n = s.game().reinforcements_remaining();
        s.handle_line(&format!("deploy {} 1", t.abbr())).unwrap();
        assert_eq!(s.game().phase_kind(), PhaseKind::Deploy);
        let r = s.handle_line(&format!("deploy {} {}", t.abbr(), n - 1)).unwrap();
        assert!(!r.is_error());
        assert_eq!(s.game().phase_kind(), PhaseKind::Attack);
        assert!(s.game().anomalies().is_empty());
        assert_eq!(s.game().board().armies_at(t), 1 + n);
    }

    #[test]
    fn partial_deploy_stays_in_deploy() {
        let mut s = session();
        let t = s.game().board().territories_of(PlayerId::Human)[0];
        let r = s.handle_line(&format!("deploy {} 1", t.abbr())).unwrap();
        assert!(matches!(r, Response::Deployed { phase: PhaseKind::Deploy, .. }));
        let r = s.handle_line("next").unwrap();
        assert!(r.to_string().contains("reinforcements still to deploy"));
    }

    #[test]
    fn rule_errors_keep_the_session_alive() {
        let mut s = session();
        let bot_t = s.game().board().territories_of(PlayerId::Bot)[0];
        let r = s.handle_line(&format!("deploy {} 1", bot_t.abbr())).unwrap();
        assert_eq!(r.to_string(), format!("error: you do not own {}", bot_t));
        assert!(s.handle_line("status").is_some());
    }

    #[test]
    fn full_human_turn_hands_over_to_bot() {
        let mut s = session();
        let t = s.game().board().territories_of(PlayerId::Human)[0];
        let n = s.game().reinforcements_remaining();
        s.handle_line(&format!("deploy {} {}", t.abbr(), n));
        s.handle_line("next");
        let r = s.handle_line("next").unwrap();
        // The bot played synchronously; it is the human's turn again unless
        // the bot won outright.
        match r {
            Response::Phase { phase, current_player, bot_actions, .. } => {
                if phase != PhaseKind::GameOver {
                    assert_eq!(phase, PhaseKind::Deploy);
                    assert_eq!(current_player, PlayerId::Human);
                }
                assert!(bot_actions > 0);
            }
            other => panic!("unexpected response: {}", other),
        }
        let replay = s.handle_line("replay").unwrap();
        assert!(matches!(replay, Response::Replay { ref entries } if !entries.is_empty()));
        let empty = s.handle_line("log").unwrap();
        assert_eq!(empty.to_string(), "no bot actions");
    }

    #[test]
    fn bot_command_refused_on_human_turn() {
        let r = session().handle_line("bot").unwrap();
        assert_eq!(r.to_string(), "error: it is not the bot's turn");
    }

    #[test]
    fn restart_resets() {
        let mut s = session();
        let t = s.game().board().territories_of(PlayerId::Human)[0];
        s.handle_line(&format!("deploy {} 1", t.abbr()));
        let r = s.handle_line("restart").unwrap();
        assert!(matches!(r, Response::Restarted { .. }));
        assert!(s.game().board().armies.iter().all(|&a| a == 1));
    }
}
