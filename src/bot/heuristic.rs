//! Board heuristics behind the bot's decisions.
//!
//! Pure functions over `BoardState` and a hand of cards; the policy turns
//! their answers into engine operations. Every choice is deterministic:
//! ties fall to territory order.

use crate::board::{neighbors, reachable_from, BoardState, PlayerId, Territory, ALL_TERRITORIES};
use crate::cards::{is_valid_set, Card};
use crate::game::MAX_ATTACK_DICE;

/// Hand size at which the bot trades.
pub const TRADE_THRESHOLD: usize = 5;

/// A chosen attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackChoice {
    pub from: Territory,
    pub to: Territory,
    pub dice: u32,
}

/// A chosen fortification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortifyPlan {
    pub from: Territory,
    pub to: Territory,
    pub count: u32,
}

/// Returns the first valid three-card set in index order.
pub fn find_trade(hand: &[Card]) -> Option<[usize; 3]> {
    let n = hand.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                if is_valid_set(&[hand[i], hand[j], hand[k]]) {
                    return Some([i, j, k]);
                }
            }
        }
    }
    None
}

/// The frontier territory of `player` with the most armies.
pub fn deploy_target(board: &BoardState, player: PlayerId) -> Option<Territory> {
    let mut best: Option<Territory> = None;
    for &t in ALL_TERRITORIES.iter() {
        if !board.owns(player, t) || !board.is_frontier(t) {
            continue;
        }
        match best {
            Some(b) if board.armies_at(b) >= board.armies_at(t) => {}
            _ => best = Some(t),
        }
    }
    best
}

/// Returns true if attack `a` is strictly preferable to `b`.
///
/// Compares the army ratio first (cross-multiplied to stay in integers),
/// then the army difference.
fn better_odds(a: (u32, u32), b: (u32, u32)) -> bool {
    let (a_att, a_def) = (a.0 as u64, a.1 as u64);
    let (b_att, b_def) = (b.0 as u64, b.1 as u64);
    let lhs = a_att * b_def;
    let rhs = b_att * a_def;
    if lhs != rhs {
        return lhs > rhs;
    }
    a_att as i64 - a_def as i64 > b_att as i64 - b_def as i64
}

/// Picks the most favourable attack for `player`, if any qualifies.
///
/// A candidate needs a source with more than one army facing an adjacent
/// enemy territory with strictly fewer armies.
pub fn best_attack(board: &BoardState, player: PlayerId) -> Option<AttackChoice> {
    let mut best: Option<(Territory, Territory, (u32, u32))> = None;
    for &from in ALL_TERRITORIES.iter() {
        let attacking = board.armies_at(from);
        if !board.owns(player, from) || attacking <= 1 {
            continue;
        }
        for &to in neighbors(from) {
            let defending = board.armies_at(to);
            if board.owns(player, to) || attacking <= defending {
                continue;
            }
            let odds = (attacking, defending);
            match best {
                Some((_, _, current)) if !better_odds(odds, current) => {}
                _ => best = Some((from, to, odds)),
            }
        }
    }
    best.map(|(from, to, (attacking, _))| AttackChoice {
        from,
        to,
        dice: (attacking - 1).min(MAX_ATTACK_DICE),
    })
}

/// Plans the end-of-turn fortification: the strongest interior territory
/// sends all but one army to the weakest frontier territory it can reach.
pub fn fortify_plan(board: &BoardState, player: PlayerId) -> Option<FortifyPlan> {
    let mut source: Option<Territory> = None;
    for &t in ALL_TERRITORIES.iter() {
        if !board.owns(player, t) || board.is_frontier(t) || board.armies_at(t) <= 1 {
            continue;
        }
        match source {
            Some(s) if board.armies_at(s) >= board.armies_at(t) => {}
            _ => source = Some(t),
        }
    }
    let from = source?;

    let to = reachable_from(from, player, board)
        .into_iter()
        .filter(|&t| board.is_frontier(t))
        .min_by_key(|&t| (board.armies_at(t), t))?;

    Some(FortifyPlan {
        from,
        to,
        count: board.armies_at(from) - 1,
    })
}
