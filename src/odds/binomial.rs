use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Exact binomial coefficient `n` choose `r`.
///
/// Returns 0 when `r > n` and 1 when `r == 0`. Results are exact at any
/// size; a 250-card deck already pushes coefficients far past 64 bits.
pub fn choose(n: u64, r: u64) -> BigUint {
    if r > n {
        return BigUint::zero();
    }
    // Symmetry keeps the loop short when r is near n.
    let r = r.min(n - r);
    let mut acc = BigUint::one();
    for k in 1..=r {
        // Multiply before dividing: a product of k consecutive integers is
        // divisible by k!, so every step stays exact.
        acc = acc * BigUint::from(n - r + k) / BigUint::from(k);
    }
    acc
}
