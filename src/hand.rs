//! Player hand representation.

use alloc::vec::Vec;

use crate::card::Card;

/// A player's hand.
///
/// Cards are addressed by index in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
