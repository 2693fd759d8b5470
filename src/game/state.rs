//! Round phase and legal-action types.

use core::fmt;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Waiting for a bet.
    #[default]
    AwaitingBet,
    /// Bet accepted; the initial cards are dealt next.
    Dealing,
    /// Player chooses hit, stay, double, split or insurance.
    PlayerActing,
    /// Dealer plays out and hands are settled.
    DealerResolving,
    /// Every hand is settled and the result can be read.
    RoundComplete,
}

/// Something the player can ask the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Place a bet.
    Bet,
    /// Deal the initial cards.
    Deal,
    /// Draw a card.
    Hit,
    /// Stand and let the dealer play.
    Stay,
    /// Double the bet and draw exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Insure against a dealer natural.
    Insurance,
    /// Refill an exhausted bankroll.
    TopUp,
    /// Clear a finished round.
    ClearRound,
}

impl Action {
    /// Returns the flag for this action in an [`Actions`] set.
    #[must_use]
    pub const fn flag(self) -> Actions {
        match self {
            Self::Bet => Actions::BET,
            Self::Deal => Actions::DEAL,
            Self::Hit => Actions::HIT,
            Self::Stay => Actions::STAY,
            Self::Double => Actions::DOUBLE,
            Self::Split => Actions::SPLIT,
            Self::Insurance => Actions::INSURANCE,
            Self::TopUp => Actions::TOP_UP,
            Self::ClearRound => Actions::CLEAR_ROUND,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bet => "bet",
            Self::Deal => "deal",
            Self::Hit => "hit",
            Self::Stay => "stay",
            Self::Double => "double",
            Self::Split => "split",
            Self::Insurance => "insurance",
            Self::TopUp => "top-up",
            Self::ClearRound => "clear round",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// Set of actions the table currently permits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Actions: u16 {
        /// See [`Action::Bet`].
        const BET = 1 << 0;
        /// See [`Action::Deal`].
        const DEAL = 1 << 1;
        /// See [`Action::Hit`].
        const HIT = 1 << 2;
        /// See [`Action::Stay`].
        const STAY = 1 << 3;
        /// See [`Action::Double`].
        const DOUBLE = 1 << 4;
        /// See [`Action::Split`].
        const SPLIT = 1 << 5;
        /// See [`Action::Insurance`].
        const INSURANCE = 1 << 6;
        /// See [`Action::TopUp`].
        const TOP_UP = 1 << 7;
        /// See [`Action::ClearRound`].
        const CLEAR_ROUND = 1 << 8;

        /// Choices open once the initial cards are dealt.
        const OPENING = Self::HIT.bits() | Self::STAY.bits() | Self::DOUBLE.bits();
        /// Choices withdrawn after the first hit.
        const FIRST_DECISION = Self::DOUBLE.bits() | Self::SPLIT.bits() | Self::INSURANCE.bits();
    }
}

impl Actions {
    /// Returns whether `action` is in the set.
    #[must_use]
    pub fn allows(self, action: Action) -> bool {
        self.contains(action.flag())
    }
}
