//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when scoring a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the raw point value: Ace = 1, numbers by rank, Jack = 11,
    /// Queen = 12, King = 13.
    ///
    /// Two cards form a splittable pair only when these values match.
    #[must_use]
    pub const fn point_value(&self) -> u8 {
        self.rank
    }

    /// Returns the point value with face cards capped at ten.
    ///
    /// ```
    /// use twentyone::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spades, 13).point_value_face10(), 10);
    /// assert_eq!(Card::new(Suit::Hearts, 1).point_value_face10(), 1);
    /// ```
    #[must_use]
    pub const fn point_value_face10(&self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };
        match self.rank {
            1 => write!(f, "A{suit}"),
            11 => write!(f, "J{suit}"),
            12 => write!(f, "Q{suit}"),
            13 => write!(f, "K{suit}"),
            rank => write!(f, "{rank}{suit}"),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
