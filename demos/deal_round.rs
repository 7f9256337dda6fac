//! Deals a deck round-robin to a table and prints every hand.
//!
//! ```text
//! cargo run --example deal_round -- --players 4 --seed 7 --suits suits.txt
//! ```

use core::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use cardpack::{Card, DeckOptions, Game, GameOptions, Suit, domain};
use clap::Parser;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "deal_round", about = "Deal a deck round-robin to a table")]
struct Args {
    /// Number of players at the table.
    #[arg(long, default_value_t = 5)]
    players: usize,

    /// Seed for shuffling and cutting (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of packs in the deck.
    #[arg(long, default_value_t = 1)]
    packs: u8,

    /// File listing one suit per line.
    #[arg(long)]
    suits: Option<PathBuf>,

    /// File listing one rank per line.
    #[arg(long)]
    ranks: Option<PathBuf>,

    /// Deal without cutting the deck first.
    #[arg(long)]
    no_cut: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(&Args::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut deck = DeckOptions::default().with_packs(args.packs);
    if let Some(path) = &args.suits {
        match domain::load_suits(path) {
            Ok(suits) => deck = deck.with_suits(suits),
            Err(err) => warn!("{err}; keeping default suits"),
        }
    }
    if let Some(path) = &args.ranks {
        match domain::load_ranks(path) {
            Ok(ranks) => deck = deck.with_ranks(ranks),
            Err(err) => warn!("{err}; keeping default ranks"),
        }
    }

    let options = GameOptions::default()
        .with_players(args.players)
        .with_cut(!args.no_cut)
        .with_deck(deck);
    let mut game = Game::new(options, seed)?;
    info!("{} (seed {seed})", game.deck);

    let dealt = game.setup_round()?;
    info!("dealt {dealt} cards to {} players", game.player_count());

    for (seat, player) in game.players().iter().enumerate() {
        println!(
            "Player {} ({} cards): {}",
            seat + 1,
            player.hand().len(),
            format_hand(player.hand())
        );
    }
    Ok(())
}

fn format_hand(hand: &[Card]) -> String {
    hand.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&format!("{}{}", card.rank.code(), card.suit.code()), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
