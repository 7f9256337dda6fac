//! The deck: an ordered pile of cards consumed by draws.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;
use crate::options::DeckOptions;

/// Largest split point chosen by [`Deck::cut`].
pub const MAX_CUT_POINT: usize = 25;

/// An ordered deck of cards.
///
/// Index 0 is the top of the deck. The deck never grows after construction:
/// draws remove cards and hand them to the caller, shuffles and cuts only
/// reorder what is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds a deck from the given options.
    ///
    /// Every (rank, suit) pair is enumerated rank-outer, suit-inner, once per
    /// pack. The deck is shuffled with `rng` if requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the pack count is zero or a domain is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::{Deck, DeckOptions};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(&DeckOptions::default().with_packs(2), &mut rng).unwrap();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn new<R: Rng + ?Sized>(options: &DeckOptions, rng: &mut R) -> Result<Self, DeckError> {
        if options.packs == 0 {
            return Err(DeckError::ZeroPacks);
        }
        if options.ranks.is_empty() || options.suits.is_empty() {
            return Err(DeckError::EmptyDomain);
        }

        let mut deck = Self {
            cards: Self::assemble(options.packs, &options.ranks, &options.suits),
        };
        if options.shuffle {
            deck.shuffle(rng);
        }

        debug!(
            "built deck of {} cards ({} packs, shuffled: {})",
            deck.len(),
            options.packs,
            options.shuffle
        );
        Ok(deck)
    }

    /// Builds one unshuffled pack from the default domains.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: Self::assemble(1, &Rank::ALL, &Suit::ALL),
        }
    }

    /// Creates a deck holding exactly `cards`, first card on top.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    fn assemble(packs: u8, ranks: &[Rank], suits: &[Suit]) -> VecDeque<Card> {
        let mut cards = VecDeque::with_capacity(packs as usize * ranks.len() * suits.len());
        for _ in 0..packs {
            for &rank in ranks {
                for &suit in suits {
                    cards.push_back(Card::new(suit, rank));
                }
            }
        }
        cards
    }

    /// Applies a uniform random permutation to the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Draws a single card from the top.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front();
        if let Some(card) = card {
            trace!("drew {card} from top");
        }
        card
    }

    /// Draws up to `n` cards from the top, in order.
    ///
    /// Returns fewer than `n` cards when the deck runs out.
    pub fn draw_from_top(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let drawn: Vec<Card> = self.cards.drain(..take).collect();
        trace!("drew {} of {n} requested cards from top", drawn.len());
        drawn
    }

    /// Draws up to `n` cards from the bottom, last card first.
    ///
    /// Returns fewer than `n` cards when the deck runs out.
    pub fn draw_from_bottom(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let drawn: Vec<Card> = (0..take).filter_map(|_| self.cards.pop_back()).collect();
        trace!("drew {} of {n} requested cards from bottom", drawn.len());
        drawn
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn top_card(&self) -> Result<&Card, DeckError> {
        self.cards.front().ok_or(DeckError::Empty)
    }

    /// Returns the bottom card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn bottom_card(&self) -> Result<&Card, DeckError> {
        self.cards.back().ok_or(DeckError::Empty)
    }

    /// Cuts the deck at a random point in `0..=25`, bounded by the deck size.
    ///
    /// Returns the chosen cut point.
    pub fn cut<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let point = rng.random_range(0..=MAX_CUT_POINT.min(self.cards.len()));
        self.cards.rotate_left(point);
        debug!("cut deck at {point}");
        point
    }

    /// Moves the first `point` cards to the bottom, keeping both runs in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CutOutOfRange`] if `point` exceeds the deck size.
    pub fn cut_at(&mut self, point: usize) -> Result<(), DeckError> {
        let len = self.cards.len();
        if point > len {
            return Err(DeckError::CutOutOfRange { point, len });
        }
        self.cards.rotate_left(point);
        debug!("cut deck at {point}");
        Ok(())
    }

    /// Returns the card at `index` (0 is the top), if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns an iterator over the remaining cards, top first.
    #[must_use]
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cards in deck.", self.cards.len())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
