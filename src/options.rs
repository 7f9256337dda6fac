//! Deck and game configuration options.

use alloc::vec::Vec;

use crate::card::{Rank, Suit};

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardpack::{DeckOptions, Suit};
///
/// let options = DeckOptions::default()
///     .with_packs(2)
///     .with_shuffle(false)
///     .with_suits(vec![Suit::Spades, Suit::Hearts]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of packs concatenated into the deck.
    pub packs: u8,
    /// Whether the assembled deck is shuffled.
    pub shuffle: bool,
    /// Rank domain, in enumeration order.
    pub ranks: Vec<Rank>,
    /// Suit domain, in enumeration order.
    pub suits: Vec<Suit>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            shuffle: true,
            ranks: Rank::ALL.to_vec(),
            suits: Suit::ALL.to_vec(),
        }
    }
}

impl DeckOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_packs(6);
    /// assert_eq!(options.packs, 6);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets whether the deck is shuffled after assembly.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the rank domain.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::{DeckOptions, Rank};
    ///
    /// let options = DeckOptions::default().with_ranks(vec![Rank::Ace, Rank::King]);
    /// assert_eq!(options.ranks, [Rank::Ace, Rank::King]);
    /// ```
    #[must_use]
    pub fn with_ranks(mut self, ranks: Vec<Rank>) -> Self {
        self.ranks = ranks;
        self
    }

    /// Sets the suit domain.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::{DeckOptions, Suit};
    ///
    /// let options = DeckOptions::default().with_suits(vec![Suit::Clubs]);
    /// assert_eq!(options.suits, [Suit::Clubs]);
    /// ```
    #[must_use]
    pub fn with_suits(mut self, suits: Vec<Suit>) -> Self {
        self.suits = suits;
        self
    }

    /// Number of cards a deck built from these options holds.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.packs as usize * self.ranks.len() * self.suits.len()
    }
}

/// Configuration options for a game.
///
/// ```
/// use cardpack::{DeckOptions, GameOptions};
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_cut(false)
///     .with_deck(DeckOptions::default().with_packs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players at the table.
    pub players: usize,
    /// Whether the deck is cut before dealing.
    pub cut: bool,
    /// Deck options.
    pub deck: DeckOptions,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 5,
            cut: true,
            deck: DeckOptions::default(),
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets whether the deck is cut before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::GameOptions;
    ///
    /// let options = GameOptions::default().with_cut(false);
    /// assert!(!options.cut);
    /// ```
    #[must_use]
    pub const fn with_cut(mut self, cut: bool) -> Self {
        self.cut = cut;
        self
    }

    /// Sets the deck options.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckOptions) -> Self {
        self.deck = deck;
        self
    }
}
