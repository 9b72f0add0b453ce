//! The draw pile.
//!
//! One card per territory plus two wildcards, shuffled once per game. Cards
//! come off the front and the pile is never reshuffled; an empty deck simply
//! yields nothing.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use super::card::Card;
use crate::board::{ALL_TERRITORIES, TERRITORY_COUNT};

/// Number of wildcards in a fresh deck.
pub const WILDCARD_COUNT: usize = 2;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = TERRITORY_COUNT + WILDCARD_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the full deck in table order, territories first.
    pub fn ordered() -> Self {
        let mut cards: VecDeque<Card> = ALL_TERRITORIES.iter().map(|&t| Card::for_territory(t)).collect();
        for _ in 0..WILDCARD_COUNT {
            cards.push_back(Card::Wildcard);
        }
        Deck { cards }
    }

    /// Builds the full deck and shuffles it with the given source.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = Deck::ordered().cards.into();
        cards.shuffle(rng);
        Deck { cards: cards.into() }
    }

    /// Removes and returns the front card, or None once the deck is spent.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
