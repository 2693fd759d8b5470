//! Messages for the presentation layer.
//!
//! A [`Table`](crate::Table) reports everything a front end needs to show
//! through a [`Sink`]. Notices are purely observational and never feed back
//! into the table.

use alloc::vec::Vec;
use core::fmt;

use crate::error::CommandError;
use crate::result::Participant;

/// Something the player should be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Nobody wins the hand.
    Push,
    /// A hand was won on points.
    Won {
        /// Who won.
        winner: Participant,
        /// The winning total.
        points: u8,
    },
    /// A hand was won by drawing five cards without going over 21.
    FiveCards {
        /// Who drew them.
        winner: Participant,
    },
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// Settlement of one half of a split follows (1 or 2).
    SplitHand(usize),
    /// Insurance was bought for `cost`.
    InsuranceTaken {
        /// Amount deducted.
        cost: usize,
    },
    /// Insurance was taken but the dealer has no natural.
    NoDealerNatural,
    /// The shoe was reshuffled.
    Reshuffled,
    /// Bankroll or bet changed.
    Bank {
        /// Current bankroll.
        bankroll: usize,
        /// Current bet.
        bet: usize,
    },
    /// Cards left in the shoe changed.
    CardsLeft(usize),
    /// A command was rejected; nothing changed.
    Rejected(CommandError),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => f.write_str("Push! Nobody wins this hand."),
            Self::Won { winner, points } => write!(f, "The {winner} has won with {points}."),
            Self::FiveCards { winner } => write!(
                f,
                "{winner} has drawn 5 cards without going over 21, {winner} wins."
            ),
            Self::PlayerBust => f.write_str("You've exceeded 21."),
            Self::DealerBust => f.write_str("Dealer has exceeded 21."),
            Self::SplitHand(1) => f.write_str("Scoring first hand of split."),
            Self::SplitHand(_) => f.write_str("Scoring second hand of split."),
            Self::InsuranceTaken { cost } => write!(f, "Insurance bought for {cost}."),
            Self::NoDealerNatural => f.write_str("Dealer does not have 21."),
            Self::Reshuffled => f.write_str("Shoe reshuffled."),
            Self::Bank { bankroll, bet } => write!(f, "Amount in Bank: {bankroll}  Bet: {bet}"),
            Self::CardsLeft(remaining) => write!(f, "Cards Left: {remaining}"),
            Self::Rejected(err) => write!(f, "{err}"),
        }
    }
}

/// Receiver for [`Notice`]s.
pub trait Sink {
    /// Handles one notice.
    fn notice(&mut self, notice: &Notice);
}

/// Discards every notice.
impl Sink for () {
    fn notice(&mut self, _notice: &Notice) {}
}

/// Collects notices in order.
impl Sink for Vec<Notice> {
    fn notice(&mut self, notice: &Notice) {
        self.push(*notice);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn notice(&mut self, notice: &Notice) {
        (**self).notice(notice);
    }
}
