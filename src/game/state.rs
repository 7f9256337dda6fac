//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck built and players seated; nothing dealt yet.
    Ready,
    /// The whole deck has been dealt out.
    Dealt,
}
