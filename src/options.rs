//! Game configuration options.

/// Fewest players a game can be created with.
pub const MIN_PLAYERS: u8 = 2;

/// Most players a game can be created with.
pub const MAX_PLAYERS: u8 = 4;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use eights::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_shuffle(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players (2 to 4).
    pub players: u8,
    /// Whether the deck is shuffled. When `false` the deck is dealt in
    /// generation order.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// The value is validated when the game is created.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets whether the deck is shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
