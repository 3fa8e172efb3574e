use crate::deck::Deck;
use crate::error::SetupError;

use super::{Game, GameState, INITIAL_HAND_SIZE};

/// How far setup has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stage {
    Fresh,
    Initialized,
    Dealt,
    Seeded,
}

impl Game {
    /// Fills the draw pile with all 52 cards.
    ///
    /// The cards are shuffled unless shuffling is disabled in the options or
    /// the game was built with [`Game::with_deck`].
    ///
    /// # Errors
    ///
    /// Returns an error if the deck was already initialized.
    pub fn initialize_deck(&mut self) -> Result<(), SetupError> {
        if self.stage != Stage::Fresh {
            return Err(SetupError::AlreadyInitialized);
        }

        if let Some(cards) = self.stacked.take() {
            self.deck.fill(cards);
        } else if self.options.shuffle {
            self.deck.fill_shuffled(&mut self.rng);
        } else {
            self.deck.fill(Deck::standard());
        }

        self.stage = Stage::Initialized;
        Ok(())
    }

    /// Deals [`INITIAL_HAND_SIZE`] cards to each player, one card per player
    /// per round.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is not initialized, hands were already
    /// dealt, or the draw pile is too small.
    pub fn deal_initial_hands(&mut self) -> Result<(), SetupError> {
        match self.stage {
            Stage::Fresh => return Err(SetupError::DeckNotInitialized),
            Stage::Dealt | Stage::Seeded => return Err(SetupError::AlreadyDealt),
            Stage::Initialized => {}
        }

        if self.deck.remaining() < self.hands.len() * INITIAL_HAND_SIZE {
            return Err(SetupError::NotEnoughCards);
        }

        for _ in 0..INITIAL_HAND_SIZE {
            for hand in &mut self.hands {
                let card = self.deck.draw().ok_or(SetupError::NotEnoughCards)?;
                hand.add_card(card);
            }
        }

        self.stage = Stage::Dealt;
        Ok(())
    }

    /// Moves the front card of the draw pile onto the discard pile and opens
    /// the game for moves.
    ///
    /// The seed card never triggers an effect.
    ///
    /// # Errors
    ///
    /// Returns an error if hands were not dealt yet, the discard pile was
    /// already seeded, or the draw pile is empty.
    pub fn seed_discard(&mut self) -> Result<(), SetupError> {
        match self.stage {
            Stage::Fresh | Stage::Initialized => return Err(SetupError::HandsNotDealt),
            Stage::Seeded => return Err(SetupError::AlreadySeeded),
            Stage::Dealt => {}
        }

        let card = self.deck.draw().ok_or(SetupError::NotEnoughCards)?;
        self.deck.discard(card);

        self.stage = Stage::Seeded;
        self.state = GameState::AwaitingMove;
        log::info!(
            "game started with {} players, top card {card}",
            self.hands.len()
        );
        Ok(())
    }

    /// Runs the full setup: initialize the deck, deal, then seed the discard
    /// pile.
    ///
    /// # Errors
    ///
    /// Returns the first setup step's error.
    pub fn start(&mut self) -> Result<(), SetupError> {
        self.initialize_deck()?;
        self.deal_initial_hands()?;
        self.seed_discard()
    }
}
