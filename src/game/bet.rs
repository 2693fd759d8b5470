use crate::deck::Deck;
use crate::error::{ActionError, BetError};
use crate::input;
use crate::notice::{Notice, Sink};
use crate::result::{HandOutcome, Settlement};
use crate::score::TWENTY_ONE;

use super::{Action, Actions, Phase, RESHUFFLE_THRESHOLD, Round, Table};

impl<D: Deck, S: Sink> Table<D, S> {
    /// Accepts the bet for the next round.
    ///
    /// No money moves until [`Table::deal`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not waiting for a bet, or the amount
    /// is below the minimum, above the maximum, or more than the bankroll.
    pub fn accept_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.round.phase != Phase::AwaitingBet {
            return Err(self.reject(BetError::IllegalAction));
        }

        if let Err(err) = input::validate_bet(&self.options, self.ledger.bankroll(), amount) {
            return Err(self.reject(err));
        }

        self.ledger.place_bet(amount);
        self.round.phase = Phase::Dealing;
        log::debug!("bet {amount} accepted");
        self.notify_bank();

        Ok(())
    }

    /// Deals two cards each to the dealer and the player, alternating and
    /// starting with the dealer, and settles any naturals.
    ///
    /// The shoe is reshuffled first if it is down to
    /// [`RESHUFFLE_THRESHOLD`] cards. Returns the phase the round moved to.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been accepted.
    pub fn deal(&mut self) -> Result<Phase, ActionError> {
        self.ensure(Action::Deal)?;

        let bet = self.ledger.current_bet();
        let opening_bankroll = self.ledger.bankroll();
        if let Err(err) = self.ledger.withdraw(bet) {
            return Err(self.reject(err));
        }
        self.round.opening_bankroll = opening_bankroll;
        self.round.staked = bet;
        self.notify_bank();

        if self.deck.remaining() <= RESHUFFLE_THRESHOLD {
            self.deck.shuffle();
            log::debug!("reshuffled, {} cards in shoe", self.deck.remaining());
            self.notify(Notice::Reshuffled);
        }

        self.round.dealer.clear();
        self.round.player.clear();
        self.round.second = None;
        for _ in 0..2 {
            let card = self.draw();
            self.round.dealer.add_card(card);
            let card = self.draw();
            self.round.player.add_card(card);
        }

        self.check_naturals();

        Ok(self.round.phase)
    }

    fn check_naturals(&mut self) {
        let dealer = self.round.dealer.score();
        let player = self.round.player.score();
        let up_ace = self.round.dealer.up_card().is_some_and(|card| card.is_ace());

        if dealer == TWENTY_ONE && player == TWENTY_ONE {
            self.settle(0, HandOutcome::Push, Settlement::Natural);
            self.finish_round();
        } else if player == TWENTY_ONE {
            self.settle(0, HandOutcome::Win, Settlement::Natural);
            self.finish_round();
        } else if dealer == TWENTY_ONE && !up_ace {
            // An Ace showing leaves the natural hidden so insurance can be offered.
            self.settle(0, HandOutcome::Lose, Settlement::Natural);
            self.finish_round();
        } else {
            let mut offers = Actions::OPENING;
            if self.round.player.is_pair() {
                offers |= Actions::SPLIT;
            }
            if up_ace {
                offers |= Actions::INSURANCE;
            }
            self.round.offers = offers;
            self.round.phase = Phase::PlayerActing;
        }
    }

    /// Adds the initial bank again once the bankroll has dropped below the
    /// minimum bet. Returns the new bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the bankroll still
    /// covers the minimum bet.
    pub fn top_up(&mut self) -> Result<usize, ActionError> {
        self.ensure(Action::TopUp)?;

        let bankroll = self.ledger.top_up();
        log::info!("bank topped up to {bankroll}");
        self.notify_bank();

        Ok(bankroll)
    }

    /// Clears a finished round and waits for the next bet.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is complete.
    pub fn clear_round(&mut self) -> Result<(), ActionError> {
        self.ensure(Action::ClearRound)?;

        self.round = Round::default();
        self.ledger.clear_bet();
        self.notify_bank();

        Ok(())
    }
}
