//! Round-robin dealing.

use log::debug;

use crate::deck::Deck;
use crate::error::DealError;
use crate::player::Player;

use super::{Game, GameState};

/// Deals the whole deck one card at a time to `players`, in seat order.
///
/// Returns the number of cards dealt.
///
/// # Errors
///
/// Returns [`DealError::NoPlayers`] if `players` is empty. The deck is left
/// untouched in that case.
pub fn deal_round_robin(deck: &mut Deck, players: &mut [Player]) -> Result<usize, DealError> {
    if players.is_empty() {
        return Err(DealError::NoPlayers);
    }

    let mut dealt = 0;
    for seat in (0..players.len()).cycle() {
        let Some(card) = deck.draw() else {
            break;
        };
        players[seat].receive(card);
        dealt += 1;
    }

    debug!("dealt {dealt} cards to {} players", players.len());
    Ok(dealt)
}

impl Game {
    /// Deals the entire deck round-robin to the players.
    ///
    /// Returns the number of cards dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck was already dealt or there are no players.
    pub fn deal(&mut self) -> Result<usize, DealError> {
        if self.state != GameState::Ready {
            return Err(DealError::AlreadyDealt);
        }

        let dealt = deal_round_robin(&mut self.deck, &mut self.players)?;
        self.state = GameState::Dealt;
        Ok(dealt)
    }
}
