use num_bigint::BigUint;
use num_rational::BigRational;
use num_traits::Zero;

use super::binomial::choose;

/// Probability that a hand of `hand` cards drawn from a `deck`-card deck
/// contains at least `need` of a group's `size` copies.
///
/// Impossible events (a threshold above the group or the hand, a group or
/// hand larger than the deck) have probability zero rather than being an
/// error.
pub fn prob_at_least(need: u64, size: u64, hand: u64, deck: u64) -> BigRational {
    if need > size.min(hand) {
        return BigRational::zero();
    }
    if need.max(size).max(hand) > deck {
        return BigRational::zero();
    }
    let mut ways = BigUint::zero();
    for drawn in need..=size.min(hand) {
        ways += choose(hand, drawn) * choose(deck - hand, size - drawn);
    }
    BigRational::new(ways.into(), choose(deck, size).into())
}

/// Probability that the hand contains none of the group's copies: the
/// `drawn = 0` term of the distribution, and the complement of
/// `prob_at_least(1, ..)`.
pub fn prob_none(size: u64, hand: u64, deck: u64) -> BigRational {
    if size.max(hand) > deck {
        return BigRational::zero();
    }
    BigRational::new(choose(deck - hand, size).into(), choose(deck, size).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use proptest::prelude::*;

    #[test]
    fn test_four_of_in_opening_hand() {
        // At least one of four copies, seven cards off a 40-card deck.
        let expected =
            BigRational::one() - BigRational::new(choose(36, 7).into(), choose(40, 7).into());
        assert_eq!(prob_at_least(1, 4, 7, 40), expected);
    }

    #[test]
    fn test_zero_threshold_is_certain() {
        for size in 0..=10 {
            assert_eq!(prob_at_least(0, size, 7, 40), BigRational::one());
        }
    }

    #[test]
    fn test_impossible_events_are_zero() {
        // Threshold above the group size.
        assert_eq!(prob_at_least(5, 4, 7, 40), BigRational::zero());
        // Threshold above the hand size.
        assert_eq!(prob_at_least(8, 20, 7, 40), BigRational::zero());
        // Group larger than the deck.
        assert_eq!(prob_at_least(1, 50, 7, 40), BigRational::zero());
        // Hand larger than the deck.
        assert_eq!(prob_at_least(1, 4, 50, 40), BigRational::zero());
    }

    #[test]
    fn test_monotone_in_threshold() {
        let mut prev = prob_at_least(0, 6, 7, 40);
        for need in 1..=7 {
            let next = prob_at_least(need, 6, 7, 40);
            assert!(
                next <= prev,
                "raising the threshold to {} raised the probability",
                need
            );
            prev = next;
        }
    }

    #[test]
    fn test_exact_counts_sum_to_one() {
        let (size, hand, deck) = (4u64, 7u64, 40u64);
        let mut total = BigRational::zero();
        for need in 0..=size.min(hand) {
            total += prob_at_least(need, size, hand, deck)
                - prob_at_least(need + 1, size, hand, deck);
        }
        assert_eq!(total, BigRational::one());
    }

    #[test]
    fn test_none_complements_at_least_one() {
        for deck in [17u64, 40, 60] {
            for size in 0..=6 {
                let whiff = prob_none(size, 7, deck);
                assert_eq!(
                    whiff + prob_at_least(1, size, 7, deck),
                    BigRational::one()
                );
            }
        }
    }

    #[test]
    fn test_certain_draw() {
        // A hand as large as the deck sees every copy.
        assert_eq!(prob_at_least(4, 4, 40, 40), BigRational::one());
    }

    proptest! {
        #[test]
        fn prop_bounded_and_monotone(size in 0u64..12, hand in 0u64..12, deck in 12u64..40) {
            let mut prev = BigRational::one();
            for need in 0..=size {
                let p = prob_at_least(need, size, hand, deck);
                prop_assert!(p >= BigRational::zero());
                prop_assert!(p <= BigRational::one());
                prop_assert!(p <= prev);
                prev = p;
            }
        }

        #[test]
        fn prop_none_matches_complement(size in 0u64..10, hand in 0u64..10, deck in 10u64..30) {
            let whiff = prob_none(size, hand, deck);
            prop_assert_eq!(whiff, BigRational::one() - prob_at_least(1, size, hand, deck));
        }
    }
}
