//! Per-seat player data: identity, hand, and turn flags.
//!
//! Territory holdings are not stored here; they are derived from the board.

use crate::board::PlayerId;
use crate::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub is_bot: bool,
    pub hand: Vec<Card>,
    /// Set by a successful conquest; earns a card at the end of the turn.
    pub conquered_this_turn: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Player {
            id,
            is_bot: id == PlayerId::Bot,
            hand: Vec::new(),
            conquered_this_turn: false,
        }
    }

    /// Removes the cards at the given indices, highest index first so the
    /// remaining indices stay valid, and returns them in that order.
    pub fn remove_cards(&mut self, indices: [usize; 3]) -> Vec<Card> {
        let mut sorted = indices;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.iter().map(|&i| self.hand.remove(i)).collect()
    }
}
