//! Dice combat.
//!
//! The attacker rolls one die per committed army (1 to 3), the defender one
//! die per defending army up to two. Both sides are sorted high to low and
//! compared pair by pair over the shorter list; the higher die wins the pair
//! and ties go to the defender. Unmatched attacker dice are ignored.

use rand::Rng;
use serde::Serialize;

use super::phase::PendingMove;
use crate::board::Territory;

/// Most dice an attacker may commit.
pub const MAX_ATTACK_DICE: u32 = 3;

/// Most dice a defender rolls.
pub const MAX_DEFENSE_DICE: u32 = 2;

/// Armies lost by each side in one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Casualties {
    pub attacker: u32,
    pub defender: u32,
}

/// Full record of one attack, returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackOutcome {
    pub from: Territory,
    pub to: Territory,
    pub attacker_rolls: Vec<u8>,
    pub defender_rolls: Vec<u8>,
    pub attacker_losses: u32,
    pub defender_losses: u32,
    pub conquered: bool,
    pub pending_move: Option<PendingMove>,
    pub game_over: bool,
}

/// Number of dice the defender rolls for a garrison of `armies`.
pub fn defender_dice(armies: u32) -> u32 {
    armies.min(MAX_DEFENSE_DICE)
}

/// Rolls `count` six-sided dice, sorted highest first.
pub fn roll_dice(count: u32, rng: &mut impl Rng) -> Vec<u8> {
    let mut rolls: Vec<u8> = (0..count).map(|_| rng.gen_range(1..=6)).collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));
    rolls
}

/// Compares attacker and defender dice and counts losses on each side.
///
/// Inputs need not be pre-sorted. Only min(len) pairs are compared.
pub fn resolve_rolls(attacker: &[u8], defender: &[u8]) -> Casualties {
    let mut a = attacker.to_vec();
    let mut d = defender.to_vec();
    a.sort_unstable_by(|x, y| y.cmp(x));
    d.sort_unstable_by(|x, y| y.cmp(x));

    let mut casualties = Casualties::default();
    for (att, def) in a.iter().zip(d.iter()) {
        if att > def {
            casualties.defender += 1;
        } else {
            casualties.attacker += 1;
        }
    }
    casualties
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn high_rolls_beat_single_defender() {
        let c = resolve_rolls(&[6, 5, 4], &[1]);
        assert_eq!(c, Casualties { attacker: 0, defender: 1 });
    }

    #[test]
    fn ties_favor_defender() {
        let c = resolve_rolls(&[4, 3], &[4, 3]);
        assert_eq!(c, Casualties { attacker: 2, defender: 0 });
    }

    #[test]
    fn split_result() {
        let c = resolve_rolls(&[6, 2, 2], &[5, 3]);
        assert_eq!(c, Casualties { attacker: 1, defender: 1 });
    }

    #[test]
    fn rolls_are_sorted_before_pairing() {
        // Sorted: [6, 1] vs [5, 2] -> attacker wins first pair, loses second.
        let c = resolve_rolls(&[1, 6], &[2, 5]);
        assert_eq!(c, Casualties { attacker: 1, defender: 1 });
    }

    #[test]
    fn single_die_attack_on_two_defenders_compares_once() {
        let c = resolve_rolls(&[3], &[6, 6]);
        assert_eq!(c, Casualties { attacker: 1, defender: 0 });
    }

    #[test]
    fn defender_dice_capped_at_two() {
        assert_eq!(defender_dice(1), 1);
        assert_eq!(defender_dice(2), 2);
        assert_eq!(defender_dice(9), 2);
    }

    #[test]
    fn rolled_dice_are_in_range_and_sorted() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..200 {
            let rolls = roll_dice(3, &mut rng);
            assert_eq!(rolls.len(), 3);
            assert!(rolls.iter().all(|&r| (1..=6).contains(&r)));
            assert!(rolls.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
