//! Draw and discard piles.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// The draw pile and discard pile of a single game.
///
/// The front of the draw pile is the next card drawn. The back of the
/// discard pile is the top card that moves are matched against.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck with no cards in either pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draw_pile: VecDeque::new(),
            discard_pile: Vec::new(),
        }
    }

    /// Returns one card of each (rank, suit) pair, suit by suit.
    #[must_use]
    pub fn standard() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Returns whether `cards` is exactly the 52 distinct cards of a standard
    /// deck, in any order.
    #[must_use]
    pub fn is_complete(cards: &[Card]) -> bool {
        if cards.len() != DECK_SIZE {
            return false;
        }
        let mut seen = [false; DECK_SIZE];
        for card in cards {
            let slot = &mut seen[Self::ordinal(*card)];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    const fn ordinal(card: Card) -> usize {
        card.suit as usize * Rank::ALL.len() + card.rank as usize
    }

    /// Fills the draw pile with a standard deck, shuffled with `rng`.
    pub fn fill_shuffled<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut cards = Self::standard();
        cards.shuffle(rng);
        log::trace!("shuffled {} cards", cards.len());
        self.fill(cards);
    }

    /// Replaces the draw pile with `cards`; the first card is drawn first.
    pub fn fill(&mut self, cards: Vec<Card>) {
        self.draw_pile = cards.into();
    }

    /// Removes and returns the front card of the draw pile.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw_pile.pop_front()
    }

    /// Places a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the draw pile, front first.
    #[must_use]
    pub const fn draw_pile(&self) -> &VecDeque<Card> {
        &self.draw_pile
    }

    /// Returns the discard pile, top card last.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}
