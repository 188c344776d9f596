use serde::{Deserialize, Serialize};
use std::fmt;

/// Mana colors in Magic: The Gathering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// Convert to the single character representation
    pub fn to_char(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

/// Everything the database records about one card.
///
/// The printed cost stays opaque symbol text; a card's colors come from the
/// explicit `colors` list, never from decoding the cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardData {
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub converted_cost: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl CardData {
    /// Whether the type line carries `word` as a type or subtype.
    pub fn has_type(&self, word: &str) -> bool {
        self.types
            .iter()
            .chain(self.subtypes.iter())
            .any(|t| t.eq_ignore_ascii_case(word))
    }

    pub fn is_creature(&self) -> bool {
        self.has_type("Creature")
    }

    pub fn is_land(&self) -> bool {
        self.has_type("Land")
    }

    /// The full type line, e.g. `Creature - Elf Druid`.
    pub fn type_line(&self) -> String {
        if self.subtypes.is_empty() {
            self.types.join(" ")
        } else {
            format!("{} - {}", self.types.join(" "), self.subtypes.join(" "))
        }
    }

    /// Power/toughness as printed, empty for noncombat cards.
    pub fn power_toughness(&self) -> String {
        match (&self.power, &self.toughness) {
            (Some(p), Some(t)) => format!("{}/{}", p, t),
            _ => String::new(),
        }
    }

    /// One line for deck listings: name, cost, type line, power/toughness.
    pub fn snippet(&self) -> String {
        format!(
            "{:<28} {:>10}  {:<26} {:>5}",
            self.name,
            self.mana_cost.as_deref().unwrap_or(""),
            self.type_line(),
            self.power_toughness()
        )
    }
}

impl fmt::Display for CardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if let Some(cost) = &self.mana_cost {
            writeln!(f, "Cost: {} ({})", cost, self.converted_cost)?;
        }
        writeln!(f, "Type: {}", self.type_line())?;
        if !self.colors.is_empty() {
            let letters: String = self.colors.iter().map(Color::to_char).collect();
            writeln!(f, "Color: {}", letters)?;
        }
        let pt = self.power_toughness();
        if !pt.is_empty() {
            writeln!(f, "P/T: {}", pt)?;
        }
        if let Some(text) = &self.text {
            writeln!(f, "{}", text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_json() {
        let json = r#"{
            "name": "Llanowar Elves",
            "mana_cost": "{G}",
            "converted_cost": 1,
            "types": ["Creature"],
            "subtypes": ["Elf", "Druid"],
            "colors": ["G"],
            "power": "1",
            "toughness": "1",
            "text": "{T}: Add {G}."
        }"#;
        let card: CardData = serde_json::from_str(json).expect("Failed to parse card");
        assert_eq!(card.name, "Llanowar Elves");
        assert_eq!(card.converted_cost, 1);
        assert_eq!(card.colors, vec![Color::Green]);
        assert!(card.is_creature());
        assert!(!card.is_land());
        assert_eq!(card.power_toughness(), "1/1");
    }

    #[test]
    fn test_defaults_for_sparse_cards() {
        let json = r#"{"name": "Island", "types": ["Land"], "subtypes": ["Island"]}"#;
        let card: CardData = serde_json::from_str(json).expect("Failed to parse card");
        assert!(card.is_land());
        assert_eq!(card.converted_cost, 0);
        assert!(card.mana_cost.is_none());
        assert_eq!(card.power_toughness(), "");
    }

    #[test]
    fn test_type_line() {
        let json = r#"{"name": "Shivan Dragon", "types": ["Creature"], "subtypes": ["Dragon"]}"#;
        let card: CardData = serde_json::from_str(json).expect("Failed to parse card");
        assert_eq!(card.type_line(), "Creature - Dragon");
    }

    #[test]
    fn test_has_type_ignores_case() {
        let json = r#"{"name": "Fireball", "types": ["Sorcery"]}"#;
        let card: CardData = serde_json::from_str(json).expect("Failed to parse card");
        assert!(card.has_type("sorcery"));
        assert!(!card.has_type("Instant"));
    }
}
