//! Structured replies to player commands.
//!
//! Each `Response` renders either as terminal text (`Display`) or as one
//! JSON object (`Serialize`, tagged by `type`).

use std::fmt;

use serde::Serialize;

use crate::board::{PlayerId, Territory};
use crate::bot::{LoggedAction, TurnSummary};
use crate::cards::Card;
use crate::game::{AttackOutcome, GameSnapshot, PhaseKind};

use super::parser::USAGE;
use super::render::{render_attack, render_board, render_status};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Deployed {
        territory: Territory,
        count: u32,
        remaining: u32,
        /// Phase after the command; deploying the last army starts the attack.
        phase: PhaseKind,
    },
    Attacked {
        outcome: AttackOutcome,
        winner: Option<PlayerId>,
    },
    Moved {
        from: Territory,
        to: Territory,
        count: u32,
    },
    Fortified {
        from: Territory,
        to: Territory,
        count: u32,
    },
    Traded {
        bonus: u32,
        reinforcements: u32,
    },
    Phase {
        phase: PhaseKind,
        current_player: PlayerId,
        reinforcements: u32,
        /// Bot actions waiting to be replayed.
        bot_actions: usize,
        winner: Option<PlayerId>,
    },
    Board {
        snapshot: Box<GameSnapshot>,
    },
    Status {
        snapshot: Box<GameSnapshot>,
    },
    Hand {
        cards: Vec<Card>,
        trade_bonus: u32,
    },
    State {
        snapshot: Box<GameSnapshot>,
    },
    BotAction {
        entry: Option<LoggedAction>,
    },
    Replay {
        entries: Vec<LoggedAction>,
    },
    BotTurn {
        summary: TurnSummary,
        entries: Vec<LoggedAction>,
    },
    Restarted {
        reinforcements: u32,
    },
    Help {
        commands: &'static [&'static str],
    },
    Error {
        reason: String,
    },
    Bye,
}

impl Response {
    pub fn help() -> Self {
        Response::Help { commands: USAGE }
    }

    pub fn error(reason: impl fmt::Display) -> Self {
        Response::Error {
            reason: reason.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }

    /// Serializes to a single JSON line.
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(s) => s,
            Err(e) => format!(r#"{{"type":"error","reason":"serialize: {}"}}"#, e),
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[LoggedAction]) -> fmt::Result {
    if entries.is_empty() {
        return f.write_str("no bot actions");
    }
    for (i, e) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{}", e)?;
    }
    Ok(())
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Deployed {
                territory,
                count,
                remaining,
                phase,
            } => {
                write!(f, "deployed {} to {}, {} left", count, territory, remaining)?;
                if *phase == PhaseKind::Attack {
                    f.write_str("; ATTACK phase")?;
                }
                Ok(())
            }
            Response::Attacked { outcome, winner } => {
                f.write_str(&render_attack(outcome))?;
                if let Some(w) = winner {
                    write!(f, ": {} wins", w)?;
                }
                Ok(())
            }
            Response::Moved { from, to, count } => {
                write!(f, "moved {} armies from {} into {}", count, from, to)
            }
            Response::Fortified { from, to, count } => {
                write!(f, "fortified {} with {} armies from {}", to, count, from)
            }
            Response::Traded { bonus, reinforcements } => {
                write!(f, "traded for {} armies, {} to deploy", bonus, reinforcements)
            }
            Response::Phase {
                phase,
                current_player,
                reinforcements,
                bot_actions,
                winner,
            } => {
                if let Some(w) = winner {
                    return write!(f, "game over: {} wins", w);
                }
                write!(f, "{} phase, {} to move", phase, current_player)?;
                if *phase == PhaseKind::Deploy {
                    write!(f, ", {} reinforcements", reinforcements)?;
                }
                if *bot_actions > 0 {
                    write!(f, " ({} bot actions to replay)", bot_actions)?;
                }
                Ok(())
            }
            Response::Board { snapshot } => f.write_str(render_board(snapshot).trim_end()),
            Response::Status { snapshot } => f.write_str(&render_status(snapshot)),
            Response::Hand { cards, trade_bonus } => {
                if cards.is_empty() {
                    f.write_str("no cards")?;
                }
                for (i, c) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}: {}", i, c)?;
                }
                write!(f, "\nnext trade pays {}", trade_bonus)
            }
            Response::State { snapshot } => match serde_json::to_string_pretty(snapshot) {
                Ok(s) => f.write_str(&s),
                Err(_) => Err(fmt::Error),
            },
            Response::BotAction { entry } => match entry {
                Some(e) => write!(f, "{}", e),
                None => f.write_str("no bot actions"),
            },
            Response::Replay { entries } => write_entries(f, entries),
            Response::BotTurn { summary, entries } => {
                write_entries(f, entries)?;
                write!(
                    f,
                    "\nbot made {} attacks and {} conquests",
                    summary.attacks, summary.conquests
                )
            }
            Response::Restarted { reinforcements } => {
                write!(f, "new game: DEPLOY phase, {} reinforcements", reinforcements)
            }
            Response::Help { commands } => {
                f.write_str("commands:")?;
                for c in commands.iter() {
                    write!(f, "\n  {}", c)?;
                }
                Ok(())
            }
            Response::Error { reason } => write!(f, "error: {}", reason),
            Response::Bye => f.write_str("bye"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_and_json() {
        let r = Response::error("already fortified this turn");
        assert!(r.is_error());
        assert_eq!(r.to_string(), "error: already fortified this turn");
        let json: serde_json::Value = serde_json::from_str(&r.to_json()).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["reason"], "already fortified this turn");
    }

    #[test]
    fn phase_text() {
        let r = Response::Phase {
            phase: PhaseKind::Deploy,
            current_player: PlayerId::Human,
            reinforcements: 7,
            bot_actions: 5,
            winner: None,
        };
        assert_eq!(r.to_string(), "DEPLOY phase, human to move, 7 reinforcements (5 bot actions to replay)");
    }

    #[test]
    fn help_lists_usage() {
        let text = Response::help().to_string();
        assert!(text.starts_with("commands:"));
        assert!(text.contains("attack <from> <to> <dice>"));
    }

    #[test]
    fn deployed_json_has_tag() {
        let r = Response::Deployed {
            territory: Territory::Peru,
            count: 2,
            remaining: 0,
            phase: PhaseKind::Attack,
        };
        let json: serde_json::Value = serde_json::from_str(&r.to_json()).unwrap();
        assert_eq!(json["type"], "deployed");
        assert_eq!(json["territory"], "Peru");
        assert_eq!(json["phase"], "ATTACK");
    }
}
