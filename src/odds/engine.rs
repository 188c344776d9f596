//! Joint draw probability over several disjoint card groups.

use num_bigint::BigUint;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::binomial::choose;

/// One group of interchangeable cards in a query: `need` is the minimum
/// number of copies the hand must contain, `size` how many copies of the
/// group the deck holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub need: u64,
    pub size: u64,
}

impl Group {
    pub fn new(need: u64, size: u64) -> Self {
        Group { need, size }
    }
}

/// Probability that a `hand`-card draw from a `deck`-card deck satisfies
/// every group's threshold at once.
///
/// Groups must be disjoint: a physical card counts toward at most one
/// group. The query parser guarantees this by rejecting names that appear
/// twice; callers building groups by hand carry the same obligation.
///
/// An empty query is vacuously certain. Queries no deck of this size can
/// satisfy (a threshold above its group, groups claiming more cards than
/// the deck holds) have probability zero.
pub fn prob_all_at_least(groups: &[Group], hand: u64, deck: u64) -> BigRational {
    if groups.is_empty() {
        return BigRational::one();
    }
    if hand > deck {
        return BigRational::zero();
    }
    let claimed: u64 = groups.iter().map(|g| g.size).sum();
    if claimed > deck {
        return BigRational::zero();
    }

    let ways = satisfying_ways(groups, hand, deck, 0, 0);
    BigRational::new(ways.into(), placement_count(groups, deck).into())
}

/// Count the placements of the remaining groups that meet every threshold,
/// given how many earlier-group copies already sit in the hand (`drawn`)
/// and outside it (`undrawn`).
fn satisfying_ways(groups: &[Group], hand: u64, deck: u64, drawn: u64, undrawn: u64) -> BigUint {
    let Some((group, rest)) = groups.split_first() else {
        return BigUint::one();
    };

    let hand_slots = hand - drawn;
    let outside_slots = deck - hand - undrawn;

    let mut ways = BigUint::zero();
    for in_hand in group.need..=group.size {
        if in_hand > hand_slots {
            // Larger draw counts only need more hand slots.
            break;
        }
        let outside = group.size - in_hand;
        if outside > outside_slots {
            continue;
        }
        ways += choose(hand_slots, in_hand)
            * choose(outside_slots, outside)
            * satisfying_ways(rest, hand, deck, drawn + in_hand, undrawn + outside);
    }
    ways
}

/// Total ways to place every group's copies in the deck: groups claim
/// slots in order, each choosing from what the earlier groups left.
fn placement_count(groups: &[Group], deck: u64) -> BigUint {
    let mut remaining = deck;
    let mut total = BigUint::one();
    for group in groups {
        total *= choose(remaining, group.size);
        remaining -= group.size;
    }
    total
}
