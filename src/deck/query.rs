use thiserror::Error;

use crate::deck::pile::Pile;
use crate::odds::Group;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Empty probability expression")]
    Empty,
    #[error("Expected a card name in '{0}'")]
    MissingCard(String),
    #[error("'{0}' is not in the deck")]
    NotInDeck(String),
    #[error("'{0}' may appear only once in an expression")]
    DuplicateCard(String),
}

/// Parse an AND/OR draw expression against a deck's main pile.
///
/// Grammar: `[COUNT] NAME (OR NAME)*`, clauses joined by `AND`. Each
/// clause becomes one group: its threshold is the leading count (default
/// 1), its size the summed copies of its names. The operators are
/// uppercase words so card names keep their lowercase "and"s. A name may
/// appear only once across the whole expression, which keeps the groups
/// disjoint for the engine.
pub fn parse_query(expr: &str, deck: &Pile) -> Result<Vec<Group>, QueryError> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(QueryError::Empty);
    }

    let mut groups = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for clause in tokens.split(|&tok| tok == "AND") {
        groups.push(parse_clause(clause, deck, &mut seen)?);
    }
    Ok(groups)
}

fn parse_clause(tokens: &[&str], deck: &Pile, seen: &mut Vec<String>) -> Result<Group, QueryError> {
    let (need, names) = match tokens.first() {
        Some(tok) => match tok.parse::<u64>() {
            Ok(count) => (count, &tokens[1..]),
            Err(_) => (1, tokens),
        },
        None => return Err(QueryError::MissingCard(String::new())),
    };

    let mut size = 0u64;
    for name_tokens in names.split(|&tok| tok == "OR") {
        let name = name_tokens.join(" ");
        if name.is_empty() {
            return Err(QueryError::MissingCard(tokens.join(" ")));
        }
        if !deck.contains(&name) {
            return Err(QueryError::NotInDeck(name));
        }
        let lowered = name.to_lowercase();
        if seen.contains(&lowered) {
            return Err(QueryError::DuplicateCard(name));
        }
        seen.push(lowered);
        size += u64::from(deck.count(&name));
    }

    Ok(Group::new(need, size))
}
