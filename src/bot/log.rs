//! Ordered log of the bot's decisions.
//!
//! The bot appends one entry per decision while it plays its turn
//! synchronously; the presentation layer drains the log afterwards at its
//! own pace. The log is cleared when the next bot turn starts.

use std::collections::VecDeque;

use serde::Serialize;

use crate::board::Territory;
use crate::cards::Card;
use crate::game::PhaseKind;

/// A single bot decision with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BotAction {
    Trade {
        cards: Vec<Card>,
        bonus: u32,
    },
    Deploy {
        territory: Territory,
        count: u32,
    },
    Phase {
        phase: PhaseKind,
    },
    Attack {
        from: Territory,
        to: Territory,
        dice: u32,
        attacker_rolls: Vec<u8>,
        defender_rolls: Vec<u8>,
        attacker_losses: u32,
        defender_losses: u32,
        conquered: bool,
    },
    Move {
        from: Territory,
        to: Territory,
        count: u32,
    },
    Fortify {
        from: Territory,
        to: Territory,
        count: u32,
    },
    EndTurn,
    /// A decision the engine refused. Should not happen.
    Rejected {
        reason: String,
    },
}

impl BotAction {
    /// Human-readable one-line description.
    pub fn describe(&self) -> String {
        match self {
            BotAction::Trade { cards, bonus } => {
                let names: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
                format!("Bot traded in {} for {} armies", names.join(", "), bonus)
            }
            BotAction::Deploy { territory, count } => {
                format!("Bot deployed {} armies to {}", count, territory)
            }
            BotAction::Phase { phase } => format!("Bot entered the {} phase", phase),
            BotAction::Attack {
                from,
                to,
                attacker_rolls,
                defender_rolls,
                attacker_losses,
                defender_losses,
                conquered,
                ..
            } => {
                let mut msg = format!(
                    "Bot attacked {} from {}: {:?} vs {:?}, lost {}, killed {}",
                    to, from, attacker_rolls, defender_rolls, attacker_losses, defender_losses
                );
                if *conquered {
                    msg.push_str(&format!(", conquered {}", to));
                }
                msg
            }
            BotAction::Move { from, to, count } => {
                format!("Bot moved {} armies from {} into {}", count, from, to)
            }
            BotAction::Fortify { from, to, count } => {
                format!("Bot fortified {} with {} armies from {}", to, count, from)
            }
            BotAction::EndTurn => "Bot ended its turn".to_string(),
            BotAction::Rejected { reason } => format!("Bot action rejected: {}", reason),
        }
    }
}

/// A logged decision plus its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedAction {
    pub action: BotAction,
    pub message: String,
}

impl From<BotAction> for LoggedAction {
    fn from(action: BotAction) -> Self {
        let message = action.describe();
        LoggedAction { action, message }
    }
}

impl std::fmt::Display for LoggedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// FIFO queue of logged bot actions.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: VecDeque<LoggedAction>,
}

impl ActionLog {
    pub fn push(&mut self, action: BotAction) {
        self.entries.push_back(action.into());
    }

    pub fn pop_front(&mut self) -> Option<LoggedAction> {
        self.entries.pop_front()
    }

    /// Removes every entry, oldest first.
    pub fn drain(&mut self) -> Vec<LoggedAction> {
        self.entries.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggedAction> {
        self.entries.iter()
    }
}
