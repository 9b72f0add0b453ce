//! Board representation.
//!
//! Contains the static map (territories, continents, adjacency), the
//! ownership/army state, and connectivity queries over it.

pub mod adjacency;
pub mod connectivity;
pub mod continent;
pub mod state;
pub mod territory;

pub use adjacency::{edges, is_adjacent, neighbors, BORDERS, BORDER_COUNT};
pub use connectivity::{connected, reachable_from};
pub use continent::{Continent, ALL_CONTINENTS, CONTINENT_COUNT};
pub use state::{BoardState, PlayerId, ALL_PLAYERS};
pub use territory::{Territory, TerritoryInfo, ALL_TERRITORIES, TERRITORY_COUNT, TERRITORY_INFO};
