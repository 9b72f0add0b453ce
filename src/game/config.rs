//! Engine options.

use serde::{Deserialize, Serialize};

/// Default cap on attacks the bot makes in one turn.
pub const DEFAULT_BOT_ATTACK_LIMIT: usize = 100;

/// Options fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for shuffles and dice; None draws from OS entropy.
    pub seed: Option<u64>,
    /// Run the bot's turn as soon as the human ends theirs.
    pub auto_bot_turn: bool,
    /// Upper bound on attack iterations in one bot turn.
    pub bot_attack_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            auto_bot_turn: true,
            bot_attack_limit: DEFAULT_BOT_ATTACK_LIMIT,
        }
    }
}

impl GameConfig {
    /// Default options with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }
}
