//! Error types for deck, dealing and domain operations.

use thiserror::Error;

/// Errors that can occur when building or inspecting a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Pack count is zero.
    #[error("pack count must be at least one")]
    ZeroPacks,
    /// Suit or rank domain is empty.
    #[error("suit and rank domains must not be empty")]
    EmptyDomain,
    /// The deck has no cards left.
    #[error("the deck is empty")]
    Empty,
    /// Cut point is larger than the deck.
    #[error("cut point {point} is out of range for a deck of {len} cards")]
    CutOutOfRange {
        /// Requested cut point.
        point: usize,
        /// Cards remaining in the deck.
        len: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// There is nobody to deal to.
    #[error("no players at the table")]
    NoPlayers,
    /// The deck was already dealt.
    #[error("the deck has already been dealt")]
    AlreadyDealt,
}

/// Errors that can occur while running a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Deck error.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Dealing error.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Player index is out of range.
    #[error("player {0} not found")]
    PlayerNotFound(usize),
}

/// Errors that can occur when parsing a suit or rank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Label is not a known suit.
    #[error("unknown suit")]
    UnknownSuit,
    /// Label is not a known rank.
    #[error("unknown rank")]
    UnknownRank,
}

/// Errors that can occur when reading a suit or rank domain.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum DomainError {
    /// The domain file could not be read.
    #[error("cannot read domain file {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line holds a label that is not part of the domain type.
    #[error("line {line}: {source} `{label}`")]
    UnknownLabel {
        /// 1-based line number.
        line: usize,
        /// The offending label.
        label: alloc::string::String,
        /// Parse failure.
        #[source]
        source: ParseCardError,
    },
    /// No labels were found.
    #[error("domain is empty")]
    Empty,
}
