//! Error types for table operations.

use thiserror::Error;

use crate::game::Action;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A bet is only accepted between rounds.
    #[error("a bet can only be placed while waiting for one")]
    IllegalAction,
    /// Bet is below the table minimum.
    #[error("bet must be at least {minimum}")]
    BelowMinimum {
        /// Table minimum.
        minimum: usize,
    },
    /// Bet is above the table maximum.
    #[error("bet must be at most {maximum}")]
    AboveMaximum {
        /// Table maximum.
        maximum: usize,
    },
    /// Bet is more than the bankroll holds.
    #[error("bet is more than the {bankroll} in the bank")]
    ExceedsBank {
        /// Current bankroll.
        bankroll: usize,
    },
    /// Bet text is not a number.
    #[error("bet is not a valid number")]
    Malformed,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not permitted in the current phase of the round.
    #[error("{0} is not allowed right now")]
    IllegalAction(Action),
    /// Insufficient funds for this action.
    #[error("not enough money: {needed} needed, {available} available")]
    InsufficientFunds {
        /// Amount the action costs.
        needed: usize,
        /// Current bankroll.
        available: usize,
    },
}

/// Errors reported by [`TableOptions::validate`](crate::TableOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Minimum bet outside `1..=10000`.
    #[error("minimum bet must be between 1 and 10000")]
    MinimumBet,
    /// Maximum bet outside `minimum_bet..=10000`.
    #[error("maximum bet must be between the minimum bet and 10000")]
    MaximumBet,
    /// Initial bank outside `minimum_bet..=100000`.
    #[error("initial bank must be between the minimum bet and 100000")]
    InitialBank,
    /// Deck count outside `1..=7`.
    #[error("number of decks must be between 1 and 7")]
    Decks,
}

/// Any error a dispatched [`Command`](crate::Command) can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}
