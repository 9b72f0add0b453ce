//! Reinforcements and the card trade-in ladder.

use crate::board::{BoardState, PlayerId, ALL_CONTINENTS};

/// Floor on the territory-based reinforcement count.
pub const MIN_REINFORCEMENTS: u32 = 3;

/// Bonus paid for the first card set traded in.
pub const FIRST_TRADE_BONUS: u32 = 4;

/// Armies a player receives at the start of their deploy phase:
/// max(3, territories / 3) plus the bonus of every fully held continent.
pub fn reinforcements(state: &BoardState, player: PlayerId) -> u32 {
    let territories = state.territory_count(player) as u32;
    let base = (territories / 3).max(MIN_REINFORCEMENTS);
    let bonus: u32 = ALL_CONTINENTS
        .iter()
        .filter(|&&c| state.owns_continent(player, c))
        .map(|c| c.bonus())
        .sum();
    base + bonus
}

/// Escalating trade-in bonus shared by both players:
/// 4, 6, 8, 10, 12, 15, 20, 25, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeLadder {
    next: u32,
}

impl Default for TradeLadder {
    fn default() -> Self {
        TradeLadder { next: FIRST_TRADE_BONUS }
    }
}

impl TradeLadder {
    /// Bonus the next trade will pay.
    pub fn current(&self) -> u32 {
        self.next
    }

    /// Pays out the current bonus and steps the ladder.
    pub fn redeem(&mut self) -> u32 {
        let paid = self.next;
        self.next = match paid {
            b if b < 12 => b + 2,
            12 => 15,
            b => b + 5,
        };
        paid
    }
}
