//! Hand scoring.
//!
//! Totals count every card at its face-10 value. A single Ace is then
//! promoted to eleven when that keeps the hand at or under 21. A second Ace
//! could never be promoted as well, so the scan stops at the first one.

use crate::card::Card;

/// Target total; anything above it is a bust.
pub const TWENTY_ONE: u8 = 21;

/// Scores a run of hand slots.
///
/// Counting stops at the first empty slot.
///
/// ```
/// use twentyone::{Card, Suit, score};
///
/// let slots = [
///     Some(Card::new(Suit::Hearts, 1)),
///     Some(Card::new(Suit::Spades, 1)),
///     Some(Card::new(Suit::Clubs, 12)),
///     None,
/// ];
/// assert_eq!(score::score(&slots), 12);
/// ```
#[must_use]
pub fn score(slots: &[Option<Card>]) -> u8 {
    let occupied = || slots.iter().map_while(|slot| slot.as_ref());

    let total = occupied().fold(0u8, |sum, card| {
        sum.saturating_add(card.point_value_face10())
    });

    if occupied().any(Card::is_ace) && total <= TWENTY_ONE - 10 {
        total + 10
    } else {
        total
    }
}

/// Returns whether the slots hold a natural: exactly two cards scoring 21.
#[must_use]
pub fn is_natural(slots: &[Option<Card>]) -> bool {
    slots.iter().map_while(|slot| slot.as_ref()).count() == 2 && score(slots) == TWENTY_ONE
}
