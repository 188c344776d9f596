use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::card::{CardDatabase, CardDatabaseError};
use crate::deck::pile::Deck;

#[derive(Error, Debug)]
pub enum DeckStoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid deck format at line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },
    #[error("Card database error: {0}")]
    DatabaseError(#[from] CardDatabaseError),
}

/// File name a deck is stored under: lowercased, spaces to underscores.
pub fn deck_filename(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c.to_ascii_lowercase() })
        .collect();
    format!("{}.deck", slug)
}

/// Parse decklist text: "COUNT CARD_NAME" lines, comments with # or //,
/// and an optional `Sideboard` line opening the sideboard section. Names
/// are validated against the database and stored with their canonical
/// spelling.
pub fn parse_decklist(
    name: &str,
    content: &str,
    database: &CardDatabase,
) -> Result<Deck, DeckStoreError> {
    let mut deck = Deck::new(name);
    let mut in_sideboard = false;

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        if trimmed.eq_ignore_ascii_case("sideboard") {
            in_sideboard = true;
            continue;
        }

        // Parse "N Card Name" format
        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        if parts.len() != 2 {
            return Err(DeckStoreError::InvalidFormat {
                line: line_num + 1,
                reason: "Expected format: 'COUNT CARD_NAME'".to_string(),
            });
        }

        let count: u32 = parts[0].parse().map_err(|_| DeckStoreError::InvalidFormat {
            line: line_num + 1,
            reason: format!("'{}' is not a valid count", parts[0]),
        })?;
        let card = database.get(parts[1].trim())?;

        let pile = if in_sideboard {
            &mut deck.sideboard
        } else {
            &mut deck.main
        };
        pile.add(&card.name, count);
    }

    Ok(deck)
}

/// Load a deck by name from `dir`. A missing file is a new empty deck.
pub fn load_deck(dir: &Path, name: &str, database: &CardDatabase) -> Result<Deck, DeckStoreError> {
    let path = dir.join(deck_filename(name));
    if !path.exists() {
        return Ok(Deck::new(name));
    }
    let content = fs::read_to_string(&path)?;
    parse_decklist(name, &content, database)
}

/// Write a deck into `dir` under its mangled file name. Returns the path.
pub fn save_deck(dir: &Path, deck: &Deck) -> Result<PathBuf, DeckStoreError> {
    let path = dir.join(deck_filename(&deck.name));
    let mut out = String::new();
    out.push_str(&format!(
        "# {} - saved {}\n",
        deck.name,
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    for (name, count) in deck.main.entries() {
        out.push_str(&format!("{} {}\n", count, name));
    }
    if !deck.sideboard.is_empty() {
        out.push_str("\nSideboard\n");
        for (name, count) in deck.sideboard.entries() {
            out.push_str(&format!("{} {}\n", count, name));
        }
    }
    fs::write(&path, out)?;
    Ok(path)
}

/// Names of the `.deck` files in `dir`, sorted.
pub fn saved_decks(dir: &Path) -> Result<Vec<String>, DeckStoreError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map_or(false, |ext| ext == "deck") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }
    names.sort_unstable();
    Ok(names)
}
