//! Table orchestration: one deck, a fixed set of players, a single deal.

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DealError, GameError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{PlayerResult, RoundResult};

pub mod deal;
pub mod state;

pub use state::GameState;

/// A table that owns the deck, the players and the random source.
///
/// The game builds its deck from [`GameOptions`] with a seeded generator, so
/// every shuffle and cut is reproducible from the seed.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    pub deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Players, in seat order.
    players: Vec<Player>,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpack::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 5);
    /// assert_eq!(game.deck.len(), 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&options.deck, &mut rng)?;
        let players = (0..options.players).map(|_| Player::new()).collect();
        debug!("seated {} players (seed {seed})", options.players);

        Ok(Self {
            deck,
            options,
            players,
            state: GameState::Ready,
            rng,
        })
    }

    /// Cuts the deck at a random point and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck has already been dealt.
    pub fn cut(&mut self) -> Result<usize, GameError> {
        if self.state != GameState::Ready {
            return Err(DealError::AlreadyDealt.into());
        }
        Ok(self.deck.cut(&mut self.rng))
    }

    /// Cuts the deck if the options ask for it, then deals.
    ///
    /// Returns the number of cards dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck was already dealt or there are no players.
    pub fn setup_round(&mut self) -> Result<usize, GameError> {
        if self.state != GameState::Ready {
            return Err(DealError::AlreadyDealt.into());
        }
        if self.players.is_empty() {
            return Err(DealError::NoPlayers.into());
        }
        if self.options.cut {
            self.cut()?;
        }
        Ok(self.deal()?)
    }

    /// Recomputes every player's score and returns the standings.
    pub fn score(&mut self) -> RoundResult {
        let players = self
            .players
            .iter_mut()
            .enumerate()
            .map(|(player_index, player)| PlayerResult {
                player_index,
                score: player.determine_score(),
                hand_size: player.hand().len(),
                cards_won: player.cards_won().len(),
            })
            .collect();
        RoundResult { players }
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if there is no such seat.
    pub fn player(&self, index: usize) -> Result<&Player, GameError> {
        self.players.get(index).ok_or(GameError::PlayerNotFound(index))
    }

    /// Returns the player at `index` mutably, e.g. to add won cards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if there is no such seat.
    pub fn player_mut(&mut self, index: usize) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(index)
            .ok_or(GameError::PlayerNotFound(index))
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
