//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ConfigError;
use crate::hand::Hand;
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
use crate::result::GameOutcome;

mod actions;
mod setup;
pub mod state;

use setup::Stage;
pub use state::{EffectFlags, GameState};

/// Number of cards dealt to each player.
pub const INITIAL_HAND_SIZE: usize = 5;

/// A card game engine that owns the deck, the hands and the turn order.
///
/// Players take turns playing a card that matches the top of the discard pile
/// by rank or suit, or drawing. Aces skip, kings reverse, and queens and jacks
/// set the draw-two and draw-four flags.
#[derive(Debug, Clone)]
pub struct Game {
    /// Draw and discard piles.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Caller-chosen deck order, consumed by `initialize_deck`.
    stacked: Option<Vec<Card>>,
    /// Player hands, indexed by player.
    hands: Vec<Hand>,
    /// Index of the player whose turn it is.
    current_player: usize,
    /// Turn-direction and effect flags.
    flags: EffectFlags,
    /// Current game state.
    state: GameState,
    /// Setup progress.
    stage: Stage,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is outside 2 to 4.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default().with_players(3), 42).unwrap();
    /// game.start().unwrap();
    /// assert_eq!(game.state(), GameState::AwaitingMove);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&options.players) {
            return Err(ConfigError::InvalidPlayerCount(options.players));
        }

        Ok(Self {
            deck: Deck::new(),
            options,
            stacked: None,
            hands: (0..options.players).map(|_| Hand::new()).collect(),
            current_player: 0,
            flags: EffectFlags::default(),
            state: GameState::Setup,
            stage: Stage::Fresh,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Creates a game that deals from `cards` in the given order instead of a
    /// shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is outside 2 to 4, or if `cards`
    /// is not exactly the 52 distinct cards.
    pub fn with_deck(options: GameOptions, cards: Vec<Card>) -> Result<Self, ConfigError> {
        let mut game = Self::new(options, 0)?;
        if !Deck::is_complete(&cards) {
            return Err(ConfigError::InvalidDeck);
        }
        game.stacked = Some(cards);
        Ok(game)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns how the game ended, or `None` while it is still running.
    #[must_use]
    pub const fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            GameState::Won { player } => Some(GameOutcome::Win { player }),
            GameState::Drawn => Some(GameOutcome::Draw),
            GameState::Setup | GameState::AwaitingMove => None,
        }
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the specified player's hand.
    ///
    /// Returns `None` if the player index is out of range.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns all hands, indexed by player.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.deck.top()
    }

    /// Returns the discard pile, top card last.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.deck.discard_pile()
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the draw and discard piles.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the turn-direction and effect flags.
    #[must_use]
    pub const fn flags(&self) -> EffectFlags {
        self.flags
    }

    /// Returns the number of cards across the draw pile, discard pile and all
    /// hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.remaining()
            + self.deck.discard_pile().len()
            + self.hands.iter().map(Hand::len).sum::<usize>()
    }
}
