use std::collections::HashMap;

use crate::card::{CardData, CardDatabase, CardDatabaseError};
use crate::rng::DrawRng;

/// A multiset of card names. Keys keep the database's canonical spelling;
/// lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: HashMap<String, u32>,
}

impl Pile {
    pub fn new() -> Self {
        Pile::default()
    }

    /// Total number of cards, counting copies.
    pub fn size(&self) -> u64 {
        self.cards.values().map(|&n| u64::from(n)).sum()
    }

    /// Number of distinct names.
    pub fn distinct(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Copies of `name` in the pile, ignoring case.
    pub fn count(&self, name: &str) -> u32 {
        self.lookup(name).map(|(_, n)| n).unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// The pile's spelling of `name`, if present.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|(key, _)| key)
    }

    fn lookup(&self, name: &str) -> Option<(&str, u32)> {
        self.cards
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(key, &n)| (key.as_str(), n))
    }

    /// Add `copies` of a card.
    pub fn add(&mut self, name: &str, copies: u32) {
        if copies == 0 {
            return;
        }
        let key = match self.lookup(name) {
            Some((key, _)) => key.to_string(),
            None => name.to_string(),
        };
        *self.cards.entry(key).or_insert(0) += copies;
    }

    /// Remove up to `copies` of a card; the entry disappears at zero.
    /// Returns how many were actually removed.
    pub fn remove(&mut self, name: &str, copies: u32) -> u32 {
        let Some((key, have)) = self.lookup(name).map(|(k, n)| (k.to_string(), n)) else {
            return 0;
        };
        let removed = copies.min(have);
        if removed == have {
            self.cards.remove(&key);
        } else if let Some(n) = self.cards.get_mut(&key) {
            *n -= removed;
        }
        removed
    }

    /// Remove every copy of a card. Returns how many there were.
    pub fn clear(&mut self, name: &str) -> u32 {
        self.remove(name, u32::MAX)
    }

    /// `(name, count)` pairs sorted by name.
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .cards
            .iter()
            .map(|(name, &n)| (name.as_str(), n))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// `(card, count)` pairs sorted by converted cost, then name.
    pub fn mana_sorted(
        &self,
        db: &CardDatabase,
    ) -> Result<Vec<(CardData, u32)>, CardDatabaseError> {
        let mut lines = Vec::with_capacity(self.cards.len());
        for (name, &count) in &self.cards {
            lines.push((db.get(name)?, count));
        }
        lines.sort_by(|a, b| {
            (a.0.converted_cost, a.0.name.as_str()).cmp(&(b.0.converted_cost, b.0.name.as_str()))
        });
        Ok(lines)
    }

    /// Copies at each converted cost, from zero through the curve's top.
    pub fn mana_curve(&self, db: &CardDatabase) -> Result<Vec<(u32, u32)>, CardDatabaseError> {
        let mut copies_at: HashMap<u32, u32> = HashMap::new();
        for (name, &count) in &self.cards {
            let card = db.get(name)?;
            *copies_at.entry(card.converted_cost).or_insert(0) += count;
        }
        let top = copies_at.keys().copied().max().unwrap_or(0);
        Ok((0..=top)
            .map(|cost| (cost, copies_at.get(&cost).copied().unwrap_or(0)))
            .collect())
    }

    /// A uniformly random sample of `k` cards, without replacement.
    pub fn random_cards(&self, k: usize, rng: &mut DrawRng) -> Vec<String> {
        let mut expanded: Vec<&str> = Vec::with_capacity(self.size() as usize);
        for (name, &count) in &self.cards {
            for _ in 0..count {
                expanded.push(name.as_str());
            }
        }
        // Sort before shuffling so a fixed seed gives the same sample.
        expanded.sort_unstable();
        rng.shuffle(&mut expanded);
        expanded.truncate(k.min(expanded.len()));
        expanded.into_iter().map(str::to_string).collect()
    }
}

/// A named deck: main pile plus sideboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pub name: String,
    pub main: Pile,
    pub sideboard: Pile,
}

impl Deck {
    pub fn new(name: &str) -> Self {
        Deck {
            name: name.to_string(),
            ..Deck::default()
        }
    }

    /// Move every copy of a card from the main pile to the sideboard.
    /// Returns how many moved.
    pub fn move_to_sideboard(&mut self, name: &str) -> u32 {
        let Some(key) = self.main.canonical(name).map(str::to_string) else {
            return 0;
        };
        let moved = self.main.clear(&key);
        self.sideboard.add(&key, moved);
        moved
    }

    /// Move every copy of a card from the sideboard back to the main pile.
    pub fn move_to_main(&mut self, name: &str) -> u32 {
        let Some(key) = self.sideboard.canonical(name).map(str::to_string) else {
            return 0;
        };
        let moved = self.sideboard.clear(&key);
        self.main.add(&key, moved);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardDatabase;

    fn test_db() -> CardDatabase {
        let cards = serde_json::from_str(
            r#"[
                {"name": "Llanowar Elves", "mana_cost": "{G}", "converted_cost": 1,
                 "types": ["Creature"], "subtypes": ["Elf", "Druid"], "colors": ["G"],
                 "power": "1", "toughness": "1"},
                {"name": "Giant Growth", "mana_cost": "{G}", "converted_cost": 1,
                 "types": ["Instant"], "colors": ["G"]},
                {"name": "Shivan Dragon", "mana_cost": "{4}{R}{R}", "converted_cost": 6,
                 "types": ["Creature"], "subtypes": ["Dragon"], "colors": ["R"],
                 "power": "5", "toughness": "5"},
                {"name": "Forest", "types": ["Land"], "subtypes": ["Forest"]}
            ]"#,
        )
        .expect("Failed to parse test cards");
        CardDatabase::from_cards(cards)
    }

    #[test]
    fn test_add_merges_spellings() {
        let mut pile = Pile::new();
        pile.add("Llanowar Elves", 2);
        pile.add("llanowar elves", 2);
        assert_eq!(pile.count("LLANOWAR ELVES"), 4);
        assert_eq!(pile.distinct(), 1);
        assert_eq!(pile.canonical("llanowar elves"), Some("Llanowar Elves"));
    }

    #[test]
    fn test_remove_floors_at_zero() {
        let mut pile = Pile::new();
        pile.add("Forest", 3);
        assert_eq!(pile.remove("forest", 2), 2);
        assert_eq!(pile.count("Forest"), 1);
        assert_eq!(pile.remove("Forest", 5), 1);
        assert!(!pile.contains("Forest"));
        assert_eq!(pile.remove("Forest", 1), 0);
    }

    #[test]
    fn test_clear_drops_every_copy() {
        let mut pile = Pile::new();
        pile.add("Giant Growth", 4);
        assert_eq!(pile.clear("giant growth"), 4);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_size_counts_copies() {
        let mut pile = Pile::new();
        pile.add("Forest", 10);
        pile.add("Giant Growth", 4);
        assert_eq!(pile.size(), 14);
        assert_eq!(pile.distinct(), 2);
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let mut pile = Pile::new();
        pile.add("Shivan Dragon", 1);
        pile.add("Forest", 2);
        pile.add("Giant Growth", 3);
        let entries = pile.entries();
        assert_eq!(
            entries,
            vec![("Forest", 2), ("Giant Growth", 3), ("Shivan Dragon", 1)]
        );
    }

    #[test]
    fn test_mana_sorted_by_cost_then_name() {
        let db = test_db();
        let mut pile = Pile::new();
        pile.add("Shivan Dragon", 2);
        pile.add("Llanowar Elves", 4);
        pile.add("Giant Growth", 4);
        pile.add("Forest", 10);
        let lines = pile.mana_sorted(&db).expect("Failed to sort pile");
        let names: Vec<&str> = lines.iter().map(|(card, _)| card.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Forest", "Giant Growth", "Llanowar Elves", "Shivan Dragon"]
        );
    }

    #[test]
    fn test_mana_curve() {
        let db = test_db();
        let mut pile = Pile::new();
        pile.add("Llanowar Elves", 4);
        pile.add("Giant Growth", 2);
        pile.add("Shivan Dragon", 3);
        let curve = pile.mana_curve(&db).expect("Failed to build curve");
        assert_eq!(curve.len(), 7);
        assert_eq!(curve[1], (1, 6));
        assert_eq!(curve[2], (2, 0));
        assert_eq!(curve[6], (6, 3));
    }

    #[test]
    fn test_random_cards_draws_from_pile() {
        let mut pile = Pile::new();
        pile.add("Forest", 10);
        pile.add("Giant Growth", 4);
        let mut rng = DrawRng::new(Some(7));
        let hand = pile.random_cards(7, &mut rng);
        assert_eq!(hand.len(), 7);
        for name in &hand {
            assert!(pile.contains(name), "drew {} which is not in the pile", name);
        }
    }

    #[test]
    fn test_random_cards_deterministic_with_seed() {
        let mut pile = Pile::new();
        pile.add("Forest", 10);
        pile.add("Giant Growth", 4);
        pile.add("Shivan Dragon", 2);
        let first = pile.random_cards(7, &mut DrawRng::new(Some(42)));
        let second = pile.random_cards(7, &mut DrawRng::new(Some(42)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_cards_capped_at_pile_size() {
        let mut pile = Pile::new();
        pile.add("Forest", 3);
        let hand = pile.random_cards(7, &mut DrawRng::new(Some(1)));
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_sideboard_moves() {
        let mut deck = Deck::new("Test");
        deck.main.add("Giant Growth", 4);
        deck.main.add("Forest", 10);

        assert_eq!(deck.move_to_sideboard("giant growth"), 4);
        assert!(!deck.main.contains("Giant Growth"));
        assert_eq!(deck.sideboard.count("Giant Growth"), 4);

        assert_eq!(deck.move_to_main("Giant Growth"), 4);
        assert_eq!(deck.main.count("Giant Growth"), 4);
        assert!(deck.sideboard.is_empty());

        assert_eq!(deck.move_to_sideboard("Shivan Dragon"), 0);
    }
}
