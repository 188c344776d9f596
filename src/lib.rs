pub mod card;
pub mod deck;
pub mod odds;
pub mod rng;
