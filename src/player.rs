//! Players, their hands and won-piles, and the scoring rule.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank, Suit};

/// Points a single won card is worth.
///
/// Aces score 15, kings, jacks and tens 10, the queen of spades 30, other
/// queens nothing, and the remaining numeric ranks their pip value.
#[must_use]
pub const fn card_points(card: Card) -> u32 {
    match (card.rank, card.suit) {
        (Rank::Ace, _) => 15,
        (Rank::King | Rank::Jack | Rank::Ten, _) => 10,
        (Rank::Queen, Suit::Spades) => 30,
        (Rank::Queen, _) => 0,
        (rank, _) => match rank.pips() {
            Some(pips) => pips as u32,
            None => 0,
        },
    }
}

/// A participant holding a hand and a pile of won cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards currently held.
    hand: Vec<Card>,
    /// Cards collected during play.
    cards_won: Vec<Card>,
    /// Score derived from the won-pile.
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand, an empty won-pile and no score.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            cards_won: Vec::new(),
            score: 0,
        }
    }

    /// Adds a dealt card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes and returns the card at `index` from the hand.
    pub fn play(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Adds cards to the won-pile.
    pub fn collect<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards_won.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the won-pile.
    #[must_use]
    pub fn cards_won(&self) -> &[Card] {
        &self.cards_won
    }

    /// Returns the score from the last call to [`Player::determine_score`].
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Recomputes the score from the won-pile and returns it.
    pub fn determine_score(&mut self) -> u32 {
        self.score = self.cards_won.iter().map(|&card| card_points(card)).sum();
        self.score
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hand: [")?;
        for (i, card) in self.hand.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "], Score: {}", self.score)
    }
}
