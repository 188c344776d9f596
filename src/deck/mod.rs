pub mod pile;
pub mod query;
pub mod store;

pub use pile::{Deck, Pile};
pub use query::{parse_query, QueryError};
pub use store::{deck_filename, load_deck, parse_decklist, save_deck, saved_decks, DeckStoreError};
