use crate::card::types::CardData;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardDatabaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Card not found: {0}")]
    CardNotFound(String),
}

/// Card data for a session, loaded from a JSON file once and indexed by
/// name. Lookups ignore case so deck files and queries can spell names
/// however they like.
pub struct CardDatabase {
    cards: HashMap<String, CardData>,
}

impl CardDatabase {
    /// Load a JSON array of cards from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CardDatabaseError> {
        let content = fs::read_to_string(path)?;
        let cards: Vec<CardData> = serde_json::from_str(&content)?;
        Ok(Self::from_cards(cards))
    }

    /// Index an in-memory card list.
    pub fn from_cards(cards: Vec<CardData>) -> Self {
        let mut map = HashMap::new();
        for card in cards {
            map.insert(card.name.to_lowercase(), card);
        }
        CardDatabase { cards: map }
    }

    /// Look a card up by name, ignoring case.
    pub fn get(&self, name: &str) -> Result<CardData, CardDatabaseError> {
        self.cards
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| CardDatabaseError::CardNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(&name.to_lowercase())
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Canonical names of every card in the database, sorted.
    pub fn card_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cards.values().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}
