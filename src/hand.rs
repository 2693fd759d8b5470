//! Player and dealer hand representations.

use crate::card::Card;
use crate::score;

/// Maximum number of cards a hand can hold (the five-card rule).
pub const HAND_CAPACITY: usize = 5;

/// A hand of up to [`HAND_CAPACITY`] cards.
///
/// Slots fill front to back; `None` marks unused capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    slots: [Option<Card>; HAND_CAPACITY],
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; HAND_CAPACITY],
        }
    }

    /// Creates a hand holding the given cards.
    ///
    /// Cards beyond [`HAND_CAPACITY`] are ignored.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Adds a card to the first empty slot.
    ///
    /// Returns `false` if the hand is already full.
    pub fn add_card(&mut self, card: Card) -> bool {
        let len = self.len();
        if len == HAND_CAPACITY {
            return false;
        }
        self.slots[len] = Some(card);
        true
    }

    /// Returns the raw slots, including empty ones.
    #[must_use]
    pub const fn slots(&self) -> &[Option<Card>; HAND_CAPACITY] {
        &self.slots
    }

    /// Returns the dealt cards in order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().map_while(|slot| *slot)
    }

    /// Returns the card at `index`, if dealt.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards().count()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    /// Returns whether the hand holds [`HAND_CAPACITY`] cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == HAND_CAPACITY
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score::score(&self.slots)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > score::TWENTY_ONE
    }

    /// Returns whether the hand is a natural (two cards scoring 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        score::is_natural(&self.slots)
    }

    /// Returns whether the hand is a pair that may be split.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        match (self.len(), self.card(0), self.card(1)) {
            (2, Some(first), Some(second)) => first.point_value() == second.point_value(),
            _ => false,
        }
    }

    /// Moves the second card of a two-card hand into a new hand.
    ///
    /// Returns `None` and leaves the hand untouched if it does not hold
    /// exactly two cards.
    pub fn split_off(&mut self) -> Option<Self> {
        if self.len() != 2 {
            return None;
        }
        let card = self.slots[1].take()?;
        let mut second = Self::new();
        second.add_card(card);
        Some(second)
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.slots = [None; HAND_CAPACITY];
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card; the second is the up card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    ///
    /// Returns `false` if the hand is already full.
    pub fn add_card(&mut self, card: Card) -> bool {
        self.hand.add_card(card)
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the face-down card.
    #[must_use]
    pub fn hole_card(&self) -> Option<Card> {
        self.hand.card(0)
    }

    /// Returns the visible card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.card(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card while the hole is hidden).
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        if self.hole_revealed {
            self.score()
        } else {
            self.up_card()
                .map_or(0, |card| score::score(&[Some(card)]))
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
