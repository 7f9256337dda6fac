//! Scoring result types.

extern crate alloc;

use alloc::vec::Vec;

/// Scoring result for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index of the player.
    pub player_index: usize,
    /// Score computed from the won-pile.
    pub score: u32,
    /// Cards still held.
    pub hand_size: usize,
    /// Cards in the won-pile.
    pub cards_won: usize,
}

/// Result of scoring every player at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
}

impl RoundResult {
    /// Returns the highest-scoring player.
    ///
    /// Returns `None` when nobody scored or the top score is shared.
    #[must_use]
    pub fn leader(&self) -> Option<&PlayerResult> {
        let best = self.players.iter().max_by_key(|p| p.score)?;
        let tied = self.players.iter().filter(|p| p.score == best.score).count() > 1;
        (best.score > 0 && !tied).then_some(best)
    }

    /// Sum of all player scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.players.iter().map(|p| p.score).sum()
    }
}
