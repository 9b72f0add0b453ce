//! Serializable view of the whole game, for rendering and JSON output.

use serde::Serialize;

use crate::board::{edges, neighbors, Continent, PlayerId, Territory, ALL_CONTINENTS, ALL_PLAYERS, ALL_TERRITORIES};
use crate::cards::Card;

use super::phase::{PendingMove, PhaseKind};
use super::{Anomaly, Game};

#[derive(Debug, Clone, Serialize)]
pub struct TerritoryView {
    pub name: Territory,
    pub abbr: &'static str,
    pub continent: Continent,
    pub owner: PlayerId,
    pub armies: u32,
    pub neighbors: Vec<Territory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContinentView {
    pub name: Continent,
    pub bonus: u32,
    pub territories: Vec<Territory>,
    /// The player holding the whole continent, if any.
    pub holder: Option<PlayerId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub is_bot: bool,
    pub territories: usize,
    pub armies: u32,
    pub hand: Vec<Card>,
    pub conquered_this_turn: bool,
}

/// Full game state at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub turn: u32,
    pub phase: PhaseKind,
    pub current_player: PlayerId,
    pub reinforcements: u32,
    pub pending_move: Option<PendingMove>,
    pub has_fortified: bool,
    pub trade_bonus: u32,
    pub deck_remaining: usize,
    pub winner: Option<PlayerId>,
    pub players: Vec<PlayerView>,
    pub territories: Vec<TerritoryView>,
    pub edges: Vec<(Territory, Territory)>,
    pub continents: Vec<ContinentView>,
    pub anomalies: Vec<Anomaly>,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let board = game.board();

        let territories = ALL_TERRITORIES
            .iter()
            .map(|&t| TerritoryView {
                name: t,
                abbr: t.abbr(),
                continent: t.continent(),
                owner: board.owner_of(t),
                armies: board.armies_at(t),
                neighbors: neighbors(t).to_vec(),
            })
            .collect();

        let continents = ALL_CONTINENTS
            .iter()
            .map(|&c| ContinentView {
                name: c,
                bonus: c.bonus(),
                territories: c.territories().to_vec(),
                holder: ALL_PLAYERS.iter().copied().find(|&p| board.owns_continent(p, c)),
            })
            .collect();

        let players = ALL_PLAYERS
            .iter()
            .map(|&id| {
                let seat = game.player(id);
                PlayerView {
                    id,
                    is_bot: seat.is_bot,
                    territories: board.territory_count(id),
                    armies: board.total_armies(id),
                    hand: seat.hand.clone(),
                    conquered_this_turn: seat.conquered_this_turn,
                }
            })
            .collect();

        GameSnapshot {
            turn: game.turn(),
            phase: game.phase_kind(),
            current_player: game.current_player(),
            reinforcements: game.reinforcements_remaining(),
            pending_move: game.pending_move(),
            has_fortified: game.has_fortified(),
            trade_bonus: game.trade_bonus(),
            deck_remaining: game.deck_remaining(),
            winner: game.winner(),
            players,
            territories,
            edges: edges(),
            continents,
            anomalies: game.anomalies().to_vec(),
        }
    }
}
