//! A match-rank-or-suit card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the draw pile, discard pile
//! and player hands, and runs the turn order. Players play a card matching the
//! top card by rank or suit, or draw. Aces skip, kings reverse the direction,
//! and queens and jacks set the draw-two and draw-four flags.
//!
//! The engine performs no I/O. A driver reads the state, collects each
//! player's choice and feeds it back through [`Game::play_card`] or
//! [`Game::draw_card`].
//!
//! # Example
//!
//! ```
//! use eights::{DrawOutcome, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.start().unwrap();
//!
//! let player = game.current_player();
//! let playable = game
//!     .hand(player)
//!     .unwrap()
//!     .cards()
//!     .iter()
//!     .position(|&card| game.is_valid_move(card));
//!
//! match playable {
//!     Some(index) => {
//!         game.play_card(index).unwrap();
//!         game.end_turn().unwrap();
//!     }
//!     None => {
//!         if let DrawOutcome::Played(_) = game.draw_card().unwrap() {
//!             game.end_turn().unwrap();
//!         }
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Effect, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, MoveError, SetupError};
pub use game::{EffectFlags, Game, GameState, INITIAL_HAND_SIZE};
pub use hand::Hand;
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use result::{DrawOutcome, GameOutcome, PlayOutcome};
