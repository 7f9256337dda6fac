//! A playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that can be built from one or more packs,
//! shuffled, cut and drawn from either end, [`Player`]s with a hand and a
//! won-pile, and a [`Game`] that deals a whole deck round-robin to a table.
//!
//! # Example
//!
//! ```
//! use cardpack::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_players(4), 42).unwrap();
//! game.setup_round().unwrap();
//! assert!(game.players().iter().all(|p| p.hand().len() == 13));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod domain;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, PACK_SIZE, Rank, Suit};
pub use deck::{Deck, MAX_CUT_POINT};
#[cfg(feature = "std")]
pub use error::DomainError;
pub use error::{DealError, DeckError, GameError, ParseCardError};
pub use game::deal::deal_round_robin;
pub use game::{Game, GameState};
pub use options::{DeckOptions, GameOptions};
pub use player::{Player, card_points};
pub use result::{PlayerResult, RoundResult};
