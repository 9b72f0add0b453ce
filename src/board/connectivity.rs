//! Connectivity through a single owner's territory.
//!
//! Breadth-first search over the adjacency graph, restricted to territories
//! held by one player. Used by fortify legality and by the bot's army
//! routing.

use std::collections::VecDeque;

use super::adjacency::neighbors;
use super::state::{BoardState, PlayerId};
use super::territory::{Territory, TERRITORY_COUNT};

/// Returns true if a chain of territories owned by `player` links `a` to `b`.
///
/// The search starts at `a` without checking its owner and only ever steps
/// into unvisited neighbors owned by `player`; it succeeds when `b` is
/// dequeued.
pub fn connected(a: Territory, b: Territory, player: PlayerId, state: &BoardState) -> bool {
    let mut visited = [false; TERRITORY_COUNT];
    let mut queue = VecDeque::with_capacity(TERRITORY_COUNT);
    visited[a as usize] = true;
    queue.push_back(a);

    while let Some(cur) = queue.pop_front() {
        if cur == b {
            return true;
        }
        for &n in neighbors(cur) {
            if visited[n as usize] || !state.owns(player, n) {
                continue;
            }
            visited[n as usize] = true;
            queue.push_back(n);
        }
    }
    false
}

/// Returns every territory reachable from `origin` through `player`'s
/// territory, in BFS order, excluding `origin` itself.
pub fn reachable_from(origin: Territory, player: PlayerId, state: &BoardState) -> Vec<Territory> {
    let mut visited = [false; TERRITORY_COUNT];
    let mut queue = VecDeque::with_capacity(TERRITORY_COUNT);
    let mut out = Vec::new();
    visited[origin as usize] = true;
    queue.push_back(origin);

    while let Some(cur) = queue.pop_front() {
        for &n in neighbors(cur) {
            if visited[n as usize] || !state.owns(player, n) {
                continue;
            }
            visited[n as usize] = true;
            out.push(n);
            queue.push_back(n);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use Territory::*;

    #[test]
    fn path_through_own_territory() {
        let state = BoardState::uniform(PlayerId::Human);
        assert!(connected(Alaska, Argentina, PlayerId::Human, &state));
        assert!(connected(Argentina, EasternAustralia, PlayerId::Human, &state));
    }

    #[test]
    fn origin_is_connected_to_itself() {
        let state = BoardState::uniform(PlayerId::Bot);
        assert!(connected(Peru, Peru, PlayerId::Human, &state));
    }

    #[test]
    fn blocked_by_foreign_territory() {
        let mut state = BoardState::uniform(PlayerId::Human);
        // Central America is the only land bridge between the Americas.
        state.set_owner(CentralAmerica, PlayerId::Bot);
        // Brazil-North Africa still links South America to the rest, so cut that too.
        state.set_owner(NorthAfrica, PlayerId::Bot);
        assert!(!connected(Alaska, Argentina, PlayerId::Human, &state));
        assert!(connected(Venezuela, Argentina, PlayerId::Human, &state));
    }

    #[test]
    fn destination_must_be_owned() {
        let mut state = BoardState::uniform(PlayerId::Human);
        state.set_owner(Japan, PlayerId::Bot);
        assert!(!connected(Kamchatka, Japan, PlayerId::Human, &state));
    }

    #[test]
    fn origin_owner_is_not_checked() {
        let mut state = BoardState::uniform(PlayerId::Human);
        state.set_owner(Iceland, PlayerId::Bot);
        assert!(connected(Iceland, GreatBritain, PlayerId::Human, &state));
    }

    #[test]
    fn reachable_set_stops_at_borders() {
        let mut state = BoardState::uniform(PlayerId::Bot);
        for &t in &[Indonesia, NewGuinea, WesternAustralia, EasternAustralia] {
            state.set_owner(t, PlayerId::Human);
        }
        let mut reach = reachable_from(Indonesia, PlayerId::Human, &state);
        reach.sort();
        assert_eq!(reach, vec![NewGuinea, WesternAustralia, EasternAustralia]);
    }
}
