use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::engine::{prob_all_at_least, Group};

/// Cards in a standard opening hand.
pub const OPENING_HAND: u64 = 7;

/// Turns a sweep covers when the caller does not say otherwise.
pub const DEFAULT_MAX_TURN: u32 = 15;

/// Query probability at one point of a turn sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOdds {
    pub turn: u32,
    pub hand_size: u64,
    pub probability: BigRational,
}

impl TurnOdds {
    /// The exact probability as a float, for display only.
    pub fn fraction(&self) -> f64 {
        self.probability.to_f64().unwrap_or_default()
    }

    /// The probability as a display percentage.
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// Evaluate a query for every turn from 0 to `max_turn`, drawing one card
/// per turn on top of the standard opening hand.
pub fn sweep(deck: u64, groups: &[Group], max_turn: u32) -> Vec<TurnOdds> {
    sweep_from(deck, groups, max_turn, OPENING_HAND)
}

/// Sweep with a custom opening hand size, e.g. after mulligans.
pub fn sweep_from(deck: u64, groups: &[Group], max_turn: u32, opening_hand: u64) -> Vec<TurnOdds> {
    (0..=max_turn)
        .map(|turn| {
            let hand_size = opening_hand + u64::from(turn);
            TurnOdds {
                turn,
                hand_size,
                probability: prob_all_at_least(groups, hand_size, deck),
            }
        })
        .collect()
}
