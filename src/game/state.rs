//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck, hands or discard pile are not set up yet.
    Setup,
    /// Waiting for the current player to play or draw.
    AwaitingMove,
    /// A player emptied their hand.
    Won {
        /// The winning player.
        player: usize,
    },
    /// The draw pile ran out. Nobody wins.
    Drawn,
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Drawn)
    }
}

/// Turn-direction and effect flags.
///
/// `draw_two` and `draw_four` only guard the top card's wildcard rule in
/// [`Game::is_valid_move`](super::Game::is_valid_move); nobody is forced to
/// draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectFlags {
    /// Turns move backwards through the player list.
    pub reversed: bool,
    /// The next turn advance is suppressed once.
    pub skipped: bool,
    /// Set by a queen.
    pub draw_two: bool,
    /// Set by a jack.
    pub draw_four: bool,
}
