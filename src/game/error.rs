//! Rule violations.
//!
//! Every rejected operation returns one of these; the `Display` text is the
//! human-readable reason shown to the player. A rejected operation never
//! mutates the game.

use crate::board::{PlayerId, Territory};

use super::phase::PhaseKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("the game is over")]
    GameOver,

    #[error("not your turn: it is {current}'s turn")]
    NotYourTurn { current: PlayerId },

    #[error("{action} is not allowed during the {phase} phase")]
    WrongPhase { action: &'static str, phase: PhaseKind },

    #[error("you do not own {0}")]
    NotOwner(Territory),

    #[error("cannot attack your own territory {0}")]
    OwnTerritory(Territory),

    #[error("{from} is not adjacent to {to}")]
    NotAdjacent { from: Territory, to: Territory },

    #[error("an attack uses 1 to 3 dice, got {0}")]
    InvalidDiceCount(u32),

    #[error("{territory} has {available} armies but needs more than {needed}")]
    NotEnoughArmies {
        territory: Territory,
        available: u32,
        needed: u32,
    },

    #[error("army count must be at least 1")]
    ZeroArmies,

    #[error("cannot deploy {requested} armies, only {remaining} reinforcements remain")]
    ExceedsReinforcements { requested: u32, remaining: u32 },

    #[error("{remaining} reinforcements still to deploy")]
    ReinforcementsRemaining { remaining: u32 },

    #[error("must move between {min} and {max} armies, got {count}")]
    MoveOutOfRange { count: u32, min: u32, max: u32 },

    #[error("a conquest move must be completed first")]
    ConquestMovePending,

    #[error("already fortified this turn")]
    AlreadyFortified,

    #[error("source and destination are the same territory")]
    SameTerritory,

    #[error("{from} and {to} are not connected through your territory")]
    NotConnected { from: Territory, to: Territory },

    #[error("card index {index} is out of range for a hand of {hand_size}")]
    CardIndexOutOfRange { index: usize, hand_size: usize },

    #[error("card indices must be distinct")]
    DuplicateCardIndex,

    #[error("those cards do not form a valid set")]
    InvalidCardSet,

    #[error("it is not the bot's turn")]
    NotBotTurn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_readable() {
        assert_eq!(RuleError::AlreadyFortified.to_string(), "already fortified this turn");
        assert_eq!(
            RuleError::NotYourTurn { current: PlayerId::Bot }.to_string(),
            "not your turn: it is bot's turn"
        );
        assert_eq!(
            RuleError::WrongPhase { action: "deploy", phase: PhaseKind::Attack }.to_string(),
            "deploy is not allowed during the ATTACK phase"
        );
        assert_eq!(
            RuleError::NotAdjacent { from: Territory::Japan, to: Territory::China }.to_string(),
            "Japan is not adjacent to China"
        );
    }
}
