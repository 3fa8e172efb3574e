//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count is outside the supported range.
    #[error("number of players must be between 2 and 4, got {0}")]
    InvalidPlayerCount(u8),
    /// A stacked deck is not exactly the 52 distinct cards.
    #[error("stacked deck must contain each of the 52 cards exactly once")]
    InvalidDeck,
}

/// Errors that can occur during game setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The deck has already been initialized.
    #[error("deck already initialized")]
    AlreadyInitialized,
    /// The deck must be initialized before dealing.
    #[error("deck not initialized")]
    DeckNotInitialized,
    /// Hands have already been dealt.
    #[error("hands already dealt")]
    AlreadyDealt,
    /// Hands must be dealt before seeding the discard pile.
    #[error("hands not dealt")]
    HandsNotDealt,
    /// The discard pile has already been seeded.
    #[error("discard pile already seeded")]
    AlreadySeeded,
    /// Not enough cards in the draw pile.
    #[error("not enough cards in the draw pile")]
    NotEnoughCards,
}

/// Errors that can occur during a player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Setup has not finished.
    #[error("game has not started")]
    NotStarted,
    /// The game has already ended.
    #[error("game is over")]
    GameOver,
    /// Card index is not in the current player's hand.
    #[error("card index out of range")]
    IndexOutOfRange,
    /// The card does not match the top card.
    #[error("card cannot be played on the top card")]
    InvalidMove,
}
