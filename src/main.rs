use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use mtg_odds::card::CardDatabase;
use mtg_odds::deck::{self, parse_query, Deck};
use mtg_odds::odds::{sweep, Group, DEFAULT_MAX_TURN, OPENING_HAND};
use mtg_odds::rng::DrawRng;

#[derive(Parser)]
#[command(name = "mtg-odds")]
#[command(about = "Exact draw odds and deck building for MTG decks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Card database file
    #[arg(short, long, default_value = "cards.json")]
    cards: String,

    /// Directory holding saved decks
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn-by-turn odds of drawing what an expression asks for
    Prob {
        /// Deck name
        deck: String,

        /// Draw expression, e.g. 2 Island OR Forest AND 1 Fireball
        #[arg(required = true)]
        expr: Vec<String>,

        /// Last turn of the sweep
        #[arg(short, long, default_value_t = DEFAULT_MAX_TURN)]
        turns: u32,
    },

    /// Add copies of a card to a deck, creating the deck if needed
    Add {
        /// Deck name
        deck: String,

        /// Number of copies
        count: u32,

        /// Card name
        #[arg(required = true)]
        card: Vec<String>,

        /// Edit the sideboard instead of the main deck
        #[arg(short, long)]
        sideboard: bool,
    },

    /// Remove copies of a card (every copy unless --count is given)
    Remove {
        /// Deck name
        deck: String,

        /// Card name
        #[arg(required = true)]
        card: Vec<String>,

        /// Number of copies to remove
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Edit the sideboard instead of the main deck
        #[arg(short, long)]
        sideboard: bool,
    },

    /// Move every copy of a card from the main deck to the sideboard
    Side {
        /// Deck name
        deck: String,

        /// Card name
        #[arg(required = true)]
        card: Vec<String>,

        /// Move from the sideboard back to the main deck
        #[arg(short, long)]
        back: bool,
    },

    /// List a deck's cards sorted by mana cost
    List {
        /// Deck name
        deck: String,

        /// Only show cards with this type or subtype
        #[arg(short, long)]
        kind: Option<String>,

        /// List the sideboard instead
        #[arg(short, long)]
        sideboard: bool,
    },

    /// Deck and sideboard sizes
    Stats {
        /// Deck name
        deck: String,
    },

    /// Mana curve histogram
    Managram {
        /// Deck name
        deck: String,
    },

    /// Draw a random opening hand
    Hand {
        /// Deck name
        deck: String,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show a card's attributes from the database
    Card {
        /// Card name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// List saved decks
    Decks,
}

fn main() {
    let cli = Cli::parse();

    let db = match CardDatabase::from_file(&cli.cards) {
        Ok(db) => {
            eprintln!("✓ Loaded {} cards from {}", db.card_count(), cli.cards);
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load cards: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Prob { deck, expr, turns } => {
            cmd_prob(&db, &cli.dir, &deck, &expr.join(" "), turns);
        }
        Commands::Add {
            deck,
            count,
            card,
            sideboard,
        } => {
            cmd_add(&db, &cli.dir, &deck, count, &card.join(" "), sideboard);
        }
        Commands::Remove {
            deck,
            card,
            count,
            sideboard,
        } => {
            cmd_remove(&db, &cli.dir, &deck, &card.join(" "), count, sideboard);
        }
        Commands::Side { deck, card, back } => {
            cmd_side(&db, &cli.dir, &deck, &card.join(" "), back);
        }
        Commands::List {
            deck,
            kind,
            sideboard,
        } => {
            cmd_list(&db, &cli.dir, &deck, kind.as_deref(), sideboard);
        }
        Commands::Stats { deck } => {
            cmd_stats(&db, &cli.dir, &deck);
        }
        Commands::Managram { deck } => {
            cmd_managram(&db, &cli.dir, &deck);
        }
        Commands::Hand { deck, seed } => {
            cmd_hand(&db, &cli.dir, &deck, seed);
        }
        Commands::Card { name } => {
            cmd_card(&db, &name.join(" "));
        }
        Commands::Decks => {
            cmd_decks(&cli.dir);
        }
    }
}

fn load_deck_or_exit(dir: &Path, name: &str, db: &CardDatabase) -> Deck {
    match deck::load_deck(dir, name, db) {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("✗ Failed to load deck '{}': {}", name, e);
            std::process::exit(1);
        }
    }
}

fn save_deck_or_exit(dir: &Path, deck: &Deck) {
    if let Err(e) = deck::save_deck(dir, deck) {
        eprintln!("✗ Failed to save deck '{}': {}", deck.name, e);
        std::process::exit(1);
    }
}

fn cmd_prob(db: &CardDatabase, dir: &Path, name: &str, expr: &str, turns: u32) {
    let deck = load_deck_or_exit(dir, name, db);
    if deck.main.is_empty() {
        eprintln!("✗ Deck '{}' is empty", name);
        std::process::exit(1);
    }

    let groups = match parse_query(expr, &deck.main) {
        Ok(groups) => groups,
        Err(e) => {
            eprintln!("✗ Bad expression: {}", e);
            std::process::exit(1);
        }
    };

    println!("\nDeck: {} ({} cards)", deck.name, deck.main.size());
    print_prob_table(deck.main.size(), &groups, turns);
}

fn print_prob_table(deck_size: u64, groups: &[Group], turns: u32) {
    println!(" Turn   Cards   Probability");
    println!("------|-------|-------------");
    for row in sweep(deck_size, groups, turns) {
        println!("{:>5} {:>7} {:>11.2}%", row.turn, row.hand_size, row.percent());
    }
}

fn cmd_add(
    db: &CardDatabase,
    dir: &Path,
    name: &str,
    count: u32,
    card_name: &str,
    sideboard: bool,
) {
    let card = match db.get(card_name) {
        Ok(card) => card,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let mut deck = load_deck_or_exit(dir, name, db);
    let pile = if sideboard {
        &mut deck.sideboard
    } else {
        &mut deck.main
    };
    pile.add(&card.name, count);
    save_deck_or_exit(dir, &deck);

    let place = if sideboard { " sideboard" } else { "" };
    println!("Added {} {} to {}{}", count, card.name, deck.name, place);
}

fn cmd_remove(
    db: &CardDatabase,
    dir: &Path,
    name: &str,
    card_name: &str,
    count: Option<u32>,
    sideboard: bool,
) {
    let mut deck = load_deck_or_exit(dir, name, db);
    let pile = if sideboard {
        &mut deck.sideboard
    } else {
        &mut deck.main
    };

    let removed = match count {
        Some(n) => pile.remove(card_name, n),
        None => pile.clear(card_name),
    };
    if removed == 0 {
        let place = if sideboard { "sideboard" } else { "deck" };
        eprintln!("✗ '{}' is not in the {}", card_name, place);
        std::process::exit(1);
    }
    save_deck_or_exit(dir, &deck);

    println!("Removed {} {} from {}", removed, card_name, deck.name);
}

fn cmd_side(db: &CardDatabase, dir: &Path, name: &str, card_name: &str, back: bool) {
    let mut deck = load_deck_or_exit(dir, name, db);
    let moved = if back {
        deck.move_to_main(card_name)
    } else {
        deck.move_to_sideboard(card_name)
    };
    if moved == 0 {
        let place = if back { "sideboard" } else { "deck" };
        eprintln!("✗ '{}' is not in the {}", card_name, place);
        std::process::exit(1);
    }
    save_deck_or_exit(dir, &deck);

    if back {
        println!("Moved {} {} back to the main deck", moved, card_name);
    } else {
        println!("Moved {} {} to the sideboard", moved, card_name);
    }
}

fn cmd_list(db: &CardDatabase, dir: &Path, name: &str, kind: Option<&str>, sideboard: bool) {
    let deck = load_deck_or_exit(dir, name, db);
    let (pile, label) = if sideboard {
        (&deck.sideboard, "sideboard")
    } else {
        (&deck.main, "deck")
    };

    let lines = match pile.mana_sorted(db) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    println!("\n=== {} ({}) ===\n", deck.name, label);
    let mut shown = 0u64;
    for (card, count) in &lines {
        if let Some(kind) = kind {
            if !card.has_type(kind) {
                continue;
            }
        }
        println!("{:>3}  {}", count, card.snippet());
        shown += u64::from(*count);
    }
    println!("\nTotal: {} cards", shown);
}

fn cmd_stats(db: &CardDatabase, dir: &Path, name: &str) {
    let deck = load_deck_or_exit(dir, name, db);
    println!(
        "Deck:      {:>3} cards ({} distinct)",
        deck.main.size(),
        deck.main.distinct()
    );
    println!(
        "Sideboard: {:>3} cards ({} distinct)",
        deck.sideboard.size(),
        deck.sideboard.distinct()
    );
    println!(
        "Total:     {:>3} cards",
        deck.main.size() + deck.sideboard.size()
    );
}

fn cmd_managram(db: &CardDatabase, dir: &Path, name: &str) {
    let deck = load_deck_or_exit(dir, name, db);
    let curve = match deck.main.mana_curve(db) {
        Ok(curve) => curve,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    println!(" Cost   Cards");
    println!("------|-------");
    for (cost, copies) in curve {
        println!("{:>5} {:>7}  {}", cost, copies, "█".repeat(copies as usize));
    }
}

fn cmd_hand(db: &CardDatabase, dir: &Path, name: &str, seed: Option<u64>) {
    let deck = load_deck_or_exit(dir, name, db);
    if deck.main.size() < OPENING_HAND {
        eprintln!("✗ Deck '{}' has fewer than {} cards", name, OPENING_HAND);
        std::process::exit(1);
    }

    let mut rng = DrawRng::new(seed);
    eprintln!("✓ Seed: {}", rng.seed());
    for card_name in deck.main.random_cards(OPENING_HAND as usize, &mut rng) {
        match db.get(&card_name) {
            Ok(card) => println!("{}", card.snippet()),
            Err(_) => println!("{}", card_name),
        }
    }
}

fn cmd_card(db: &CardDatabase, name: &str) {
    match db.get(name) {
        Ok(card) => print!("{}", card),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_decks(dir: &Path) {
    match deck::saved_decks(dir) {
        Ok(names) if names.is_empty() => println!("No saved decks"),
        Ok(names) => {
            for name in names {
                println!("{}", name);
            }
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}
