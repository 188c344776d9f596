pub mod binomial;
pub mod engine;
pub mod hypergeom;
pub mod sweep;

pub use binomial::choose;
pub use engine::{prob_all_at_least, Group};
pub use hypergeom::{prob_at_least, prob_none};
pub use sweep::{sweep, sweep_from, TurnOdds, DEFAULT_MAX_TURN, OPENING_HAND};
