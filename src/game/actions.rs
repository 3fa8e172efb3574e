use crate::card::{Card, Effect, Rank};
use crate::error::MoveError;
use crate::result::{DrawOutcome, PlayOutcome};

use super::{Game, GameState};

impl Game {
    fn ensure_awaiting_move(&self) -> Result<(), MoveError> {
        match self.state {
            GameState::AwaitingMove => Ok(()),
            GameState::Setup => Err(MoveError::NotStarted),
            GameState::Won { .. } | GameState::Drawn => Err(MoveError::GameOver),
        }
    }

    /// Returns whether `card` may be played on the current top card.
    ///
    /// A top card of an effect rank accepts any card while its flag is clear
    /// (ace: `skipped`, king: `reversed`, queen: `draw_two`, jack:
    /// `draw_four`). Otherwise the card must match the top card's rank or
    /// suit.
    ///
    /// Always `false` before setup finishes and after the game ends.
    #[must_use]
    pub fn is_valid_move(&self, card: Card) -> bool {
        if self.state != GameState::AwaitingMove {
            return false;
        }
        let Some(top) = self.deck.top() else {
            return false;
        };

        let flags = self.flags;
        match top.rank {
            Rank::Ace if !flags.skipped => true,
            Rank::King if !flags.reversed => true,
            Rank::Queen if !flags.draw_two => true,
            Rank::Jack if !flags.draw_four => true,
            _ => card.rank == top.rank || card.suit == top.suit,
        }
    }

    /// Checks that the current player may play the card at `index`, without
    /// changing anything.
    ///
    /// Returns the card on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move, the index is not
    /// in the current player's hand, or the card does not match the top card.
    pub fn check_move(&self, index: usize) -> Result<Card, MoveError> {
        self.ensure_awaiting_move()?;

        let card = self.hands[self.current_player]
            .get(index)
            .ok_or(MoveError::IndexOutOfRange)?;

        if !self.is_valid_move(card) {
            return Err(MoveError::InvalidMove);
        }

        Ok(card)
    }

    /// Plays the card at `index` from the current player's hand onto the
    /// discard pile and applies its effect.
    ///
    /// Aces set `skipped`, kings toggle `reversed`, queens set `draw_two` and
    /// jacks set `draw_four`. Every card except a jack then clears both
    /// `draw_two` and `draw_four`, so a queen's flag never survives its own
    /// play.
    ///
    /// The turn does not advance; call [`Game::end_turn`] afterwards. If the
    /// play empties the hand, the game ends and the player is reported as the
    /// winner.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if [`Game::check_move`]
    /// rejects the move.
    pub fn play_card(&mut self, index: usize) -> Result<PlayOutcome, MoveError> {
        self.check_move(index)?;

        let player = self.current_player;
        let card = self.hands[player]
            .remove(index)
            .ok_or(MoveError::IndexOutOfRange)?;
        self.deck.discard(card);

        let effect = card.rank.effect();
        match effect {
            Some(Effect::Skip) => self.flags.skipped = true,
            Some(Effect::Reverse) => self.flags.reversed = !self.flags.reversed,
            Some(Effect::DrawTwo) => self.flags.draw_two = true,
            Some(Effect::DrawFour) => self.flags.draw_four = true,
            None => {}
        }
        if card.rank != Rank::Jack {
            self.flags.draw_two = false;
            self.flags.draw_four = false;
        }
        log::debug!("player {player} played {card}, flags {:?}", self.flags);

        let winner = if self.hands[player].is_empty() {
            self.state = GameState::Won { player };
            log::info!("player {player} wins");
            Some(player)
        } else {
            None
        };

        Ok(PlayOutcome {
            player,
            card,
            effect,
            winner,
        })
    }

    /// Draws a card for the current player.
    ///
    /// A drawn card that matches the top card is played at once, the same way
    /// [`Game::play_card`] would. A card that does not match stays in hand and
    /// the turn passes to the next player, even if `skipped` is set.
    ///
    /// Drawing from an empty draw pile ends the game in a draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move.
    pub fn draw_card(&mut self) -> Result<DrawOutcome, MoveError> {
        self.ensure_awaiting_move()?;

        let player = self.current_player;
        let Some(card) = self.deck.draw() else {
            self.state = GameState::Drawn;
            log::info!("draw pile is empty, game ends in a draw");
            return Ok(DrawOutcome::Exhausted);
        };

        let hand = &mut self.hands[player];
        hand.add_card(card);
        let index = hand.len() - 1;

        if self.is_valid_move(card) {
            log::debug!("player {player} drew {card} and plays it");
            return self.play_card(index).map(DrawOutcome::Played);
        }

        log::debug!("player {player} drew {card} and keeps it");
        self.update_player();
        Ok(DrawOutcome::Kept { player, card })
    }

    /// Moves the turn to the next player in the current direction.
    pub fn update_player(&mut self) {
        let count = self.hands.len();
        self.current_player = if self.flags.reversed {
            (self.current_player + count - 1) % count
        } else {
            (self.current_player + 1) % count
        };
        log::debug!("turn passes to player {}", self.current_player);
    }

    /// Finishes the current player's turn after a play.
    ///
    /// If `skipped` is set it is cleared and the same player moves again.
    /// Otherwise the turn advances with [`Game::update_player`]. Returns the
    /// player who moves next.
    ///
    /// Not needed after [`DrawOutcome::Kept`], which already passed the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move.
    pub fn end_turn(&mut self) -> Result<usize, MoveError> {
        self.ensure_awaiting_move()?;

        if self.flags.skipped {
            self.flags.skipped = false;
            log::debug!("skip consumed, player {} moves again", self.current_player);
        } else {
            self.update_player();
        }

        Ok(self.current_player)
    }
}
