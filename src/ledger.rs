//! Bankroll and bet bookkeeping.

use crate::error::ActionError;
use crate::result::HandOutcome;

/// Computes the amount credited back for a settled hand.
///
/// A doubled hand stakes twice the bet. A win returns the stake plus equal
/// winnings, a push returns the stake, and an insured loss returns the
/// original bet.
///
/// ```
/// use twentyone::{HandOutcome, ledger};
///
/// assert_eq!(ledger::payout(HandOutcome::Win, 5, false), 10);
/// assert_eq!(ledger::payout(HandOutcome::Win, 5, true), 20);
/// assert_eq!(ledger::payout(HandOutcome::Push, 5, true), 10);
/// assert_eq!(ledger::payout(HandOutcome::Lose, 5, false), 0);
/// ```
#[must_use]
pub const fn payout(outcome: HandOutcome, bet: usize, doubled: bool) -> usize {
    let stake = if doubled { bet * 2 } else { bet };
    match outcome {
        HandOutcome::Win => stake * 2,
        HandOutcome::Push => stake,
        HandOutcome::Insured => bet,
        HandOutcome::Lose => 0,
    }
}

/// Money held by the player across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankLedger {
    bankroll: usize,
    current_bet: usize,
    initial_bank: usize,
}

impl BankLedger {
    /// Creates a ledger holding `initial_bank`.
    #[must_use]
    pub const fn new(initial_bank: usize) -> Self {
        Self {
            bankroll: initial_bank,
            current_bet: 0,
            initial_bank,
        }
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet for the current round (0 between rounds).
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the amount added by each top-up.
    #[must_use]
    pub const fn initial_bank(&self) -> usize {
        self.initial_bank
    }

    /// Records the bet for the round without moving any money.
    pub const fn place_bet(&mut self, amount: usize) {
        self.current_bet = amount;
    }

    /// Clears the round's bet.
    pub const fn clear_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Returns whether the bankroll covers `amount`.
    #[must_use]
    pub const fn can_afford(&self, amount: usize) -> bool {
        self.bankroll >= amount
    }

    /// Takes `amount` out of the bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsufficientFunds`] and leaves the bankroll
    /// untouched if it holds less than `amount`.
    pub const fn withdraw(&mut self, amount: usize) -> Result<(), ActionError> {
        match self.bankroll.checked_sub(amount) {
            Some(rest) => {
                self.bankroll = rest;
                Ok(())
            }
            None => Err(ActionError::InsufficientFunds {
                needed: amount,
                available: self.bankroll,
            }),
        }
    }

    /// Adds `amount` to the bankroll.
    pub const fn deposit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    /// Credits the payout for a settled hand and returns it.
    pub const fn apply_result(&mut self, outcome: HandOutcome, bet: usize, doubled: bool) -> usize {
        let amount = payout(outcome, bet, doubled);
        self.deposit(amount);
        amount
    }

    /// Adds the initial bank again and returns the new bankroll.
    pub const fn top_up(&mut self) -> usize {
        self.deposit(self.initial_bank);
        self.bankroll
    }
}
