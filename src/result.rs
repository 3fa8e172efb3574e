//! Move and game outcome types.

use crate::card::{Card, Effect};

/// Result of a card being played onto the discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The player who played the card.
    pub player: usize,
    /// The card played.
    pub card: Card,
    /// The effect the card's rank triggered, if any.
    pub effect: Option<Effect>,
    /// Set when the play emptied the player's hand.
    pub winner: Option<usize>,
}

/// Result of a draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The drawn card matched and was played immediately.
    ///
    /// The turn has not advanced yet; call [`Game::end_turn`](crate::Game::end_turn).
    Played(PlayOutcome),
    /// The drawn card did not match and stays in hand.
    ///
    /// The turn has already advanced to the next player.
    Kept {
        /// The player who drew.
        player: usize,
        /// The card drawn.
        card: Card,
    },
    /// The draw pile was empty. The game ends in a draw.
    Exhausted,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// A player emptied their hand.
    Win {
        /// The winning player.
        player: usize,
    },
    /// A draw was requested from an empty draw pile.
    Draw,
}
