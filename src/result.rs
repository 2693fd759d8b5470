//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
    /// Push (tie); the stake is returned.
    Push,
    /// Dealer had a natural but insurance returned the bet.
    Insured,
}

/// Who took a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Dealer => f.write_str("Dealer"),
        }
    }
}

/// Why a hand was settled the way it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Settlement {
    /// Natural dealt to the player, the dealer, or both.
    Natural,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Someone drew five cards without going over 21.
    FiveCards,
    /// Totals were compared.
    Showdown,
    /// Insurance was taken against a dealer natural.
    Insurance,
}

/// Result for a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The hand index (1 for the split-off hand).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// How the outcome was reached.
    pub settlement: Settlement,
    /// The bet on this hand.
    pub bet: usize,
    /// Whether the bet was doubled.
    pub doubled: bool,
    /// Amount credited back to the bankroll.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Results for each player hand (two after a split).
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Insurance cost paid this round (0 if none taken).
    pub insurance_cost: usize,
    /// Bankroll when the round was dealt, before the bet was taken.
    pub opening_bankroll: usize,
    /// Total staked this round, insurance included.
    pub staked: usize,
    /// Total credited back this round.
    pub total_payout: usize,
    /// Bankroll once the round settled.
    pub bankroll: usize,
}

impl RoundResult {
    /// Net change to the bankroll over the round.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bankroll amounts fit in isize")]
    pub const fn net(&self) -> isize {
        self.total_payout as isize - self.staked as isize
    }
}
