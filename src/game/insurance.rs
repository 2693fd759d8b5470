use crate::deck::Deck;
use crate::error::ActionError;
use crate::notice::{Notice, Sink};
use crate::result::{HandOutcome, Settlement};

use super::{Action, Actions, Table};

/// Insurance costs a quarter of the bet, rounded down.
const INSURANCE_DIVISOR: usize = 4;

impl<D: Deck, S: Sink> Table<D, S> {
    /// Returns whether insurance is currently being offered.
    pub fn is_insurance_offered(&self) -> bool {
        self.legal_actions().contains(Actions::INSURANCE)
    }

    /// Returns what insurance would cost for the current bet.
    pub const fn insurance_quote(&self) -> usize {
        self.ledger.current_bet() / INSURANCE_DIVISOR
    }

    /// Takes insurance against a dealer natural.
    ///
    /// Insurance is offered once, while the dealer shows an Ace. If the hole
    /// card is worth ten the bet is returned, the dealer wins with 21 and the
    /// round ends; only the insurance cost is lost. Otherwise play continues.
    ///
    /// Returns `true` if the dealer had a natural.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not offered, or costs more than the
    /// bankroll. A shortfall still withdraws the offer; the bankroll is left
    /// untouched.
    pub fn insurance(&mut self) -> Result<bool, ActionError> {
        self.ensure(Action::Insurance)?;

        let cost = self.insurance_quote();
        self.round.offers.remove(Actions::INSURANCE);
        if let Err(err) = self.ledger.withdraw(cost) {
            return Err(self.reject(err));
        }
        self.round.insurance_cost = cost;
        self.round.staked += cost;
        self.notify(Notice::InsuranceTaken { cost });
        self.notify_bank();

        let hole_is_ten = self
            .round
            .dealer
            .hole_card()
            .is_some_and(|card| card.point_value_face10() == 10);

        if hole_is_ten {
            self.settle(0, HandOutcome::Insured, Settlement::Insurance);
            self.finish_round();
        } else {
            self.notify(Notice::NoDealerNatural);
        }

        Ok(hole_is_ten)
    }
}
