//! Card types and deck constants.

use core::fmt;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace. Skips the next player.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack. Sets the draw-four flag.
    Jack,
    /// Queen. Sets the draw-two flag.
    Queen,
    /// King. Reverses the turn direction.
    King,
}

impl Rank {
    /// All ranks, in deck generation order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the effect triggered when a card of this rank is played.
    ///
    /// ```
    /// use eights::{Effect, Rank};
    ///
    /// assert_eq!(Rank::Ace.effect(), Some(Effect::Skip));
    /// assert_eq!(Rank::Seven.effect(), None);
    /// ```
    #[must_use]
    pub const fn effect(self) -> Option<Effect> {
        match self {
            Self::Ace => Some(Effect::Skip),
            Self::King => Some(Effect::Reverse),
            Self::Queen => Some(Effect::DrawTwo),
            Self::Jack => Some(Effect::DrawFour),
            _ => None,
        }
    }

    /// Returns whether this is one of the four effect ranks.
    #[must_use]
    pub const fn is_effect(self) -> bool {
        self.effect().is_some()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ace => "ACE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        })
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in deck generation order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "CLUBS",
            Self::Diamonds => "DIAMONDS",
            Self::Hearts => "HEARTS",
            Self::Spades => "SPADES",
        })
    }
}

/// Side effect of playing an effect-rank card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// The next turn advance is suppressed once.
    Skip,
    /// Turn direction flips.
    Reverse,
    /// The draw-two flag is set.
    DrawTwo,
    /// The draw-four flag is set.
    DrawFour,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
