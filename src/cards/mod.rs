//! Territory cards, set validation, and the draw pile.

pub mod card;
pub mod deck;

pub use card::{is_valid_set, Card, CardKind};
pub use deck::{Deck, DECK_SIZE, WILDCARD_COUNT};
