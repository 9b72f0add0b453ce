//! Ownership and army placement.
//!
//! Holds who controls each territory and how many armies sit on it. This is
//! the single source of truth for ownership: a player's territory list is
//! always derived from it, never stored separately.

use serde::Serialize;

use super::adjacency::neighbors;
use super::continent::Continent;
use super::territory::{Territory, ALL_TERRITORIES, TERRITORY_COUNT};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerId {
    Human,
    Bot,
}

/// Both seats in turn order.
pub const ALL_PLAYERS: [PlayerId; 2] = [PlayerId::Human, PlayerId::Bot];

impl PlayerId {
    /// Returns the lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            PlayerId::Human => "human",
            PlayerId::Bot => "bot",
        }
    }

    /// Returns the seat index (0 for the human, 1 for the bot).
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Human => 0,
            PlayerId::Bot => 1,
        }
    }

    /// Returns the other seat.
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Human => PlayerId::Bot,
            PlayerId::Bot => PlayerId::Human,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ownership and army counts for every territory.
///
/// Uses fixed-size arrays indexed by `Territory as usize`, so every
/// territory always has exactly one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub owner: [PlayerId; TERRITORY_COUNT],
    pub armies: [u32; TERRITORY_COUNT],
}

impl BoardState {
    /// Creates a board where one player holds everything with one army each.
    pub fn uniform(owner: PlayerId) -> Self {
        BoardState {
            owner: [owner; TERRITORY_COUNT],
            armies: [1; TERRITORY_COUNT],
        }
    }

    /// Deals territories round-robin in the given order, starting with the
    /// human, one army each.
    pub fn deal(order: &[Territory; TERRITORY_COUNT]) -> Self {
        let mut state = BoardState::uniform(PlayerId::Human);
        for (i, &t) in order.iter().enumerate() {
            state.owner[t as usize] = if i % 2 == 0 { PlayerId::Human } else { PlayerId::Bot };
        }
        state
    }

    #[inline]
    pub fn owner_of(&self, territory: Territory) -> PlayerId {
        self.owner[territory as usize]
    }

    #[inline]
    pub fn armies_at(&self, territory: Territory) -> u32 {
        self.armies[territory as usize]
    }

    pub fn set_owner(&mut self, territory: Territory, owner: PlayerId) {
        self.owner[territory as usize] = owner;
    }

    pub fn set_armies(&mut self, territory: Territory, armies: u32) {
        self.armies[territory as usize] = armies;
    }

    /// Returns true if `player` controls `territory`.
    #[inline]
    pub fn owns(&self, player: PlayerId, territory: Territory) -> bool {
        self.owner_of(territory) == player
    }

    /// Returns the territories held by `player`, in board order.
    pub fn territories_of(&self, player: PlayerId) -> Vec<Territory> {
        ALL_TERRITORIES
            .iter()
            .copied()
            .filter(|&t| self.owns(player, t))
            .collect()
    }

    /// Counts the territories held by `player`.
    pub fn territory_count(&self, player: PlayerId) -> usize {
        self.owner.iter().filter(|&&o| o == player).count()
    }

    /// Sums the armies of every territory held by `player`.
    pub fn total_armies(&self, player: PlayerId) -> u32 {
        ALL_TERRITORIES
            .iter()
            .filter(|&&t| self.owns(player, t))
            .map(|&t| self.armies_at(t))
            .sum()
    }

    /// Returns true if `player` holds every territory of the continent.
    pub fn owns_continent(&self, player: PlayerId, continent: Continent) -> bool {
        continent.territories().iter().all(|&t| self.owns(player, t))
    }

    /// Returns true if any neighbor of `territory` has a different owner.
    pub fn is_frontier(&self, territory: Territory) -> bool {
        let owner = self.owner_of(territory);
        neighbors(territory).iter().any(|&n| self.owner_of(n) != owner)
    }

    /// Returns the neighbors of `territory` held by someone else.
    pub fn hostile_neighbors(&self, territory: Territory) -> Vec<Territory> {
        let owner = self.owner_of(territory);
        neighbors(territory)
            .iter()
            .copied()
            .filter(|&n| self.owner_of(n) != owner)
            .collect()
    }

    /// Returns the sole remaining owner if one player holds the whole map.
    pub fn sole_owner(&self) -> Option<PlayerId> {
        let first = self.owner[0];
        self.owner.iter().all(|&o| o == first).then_some(first)
    }
}
