use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::notice::{Notice, Sink};
use crate::result::{HandOutcome, Settlement};
use crate::score::TWENTY_ONE;

use super::{Action, Actions, Table};

impl<D: Deck, S: Sink> Table<D, S> {
    /// Player action: Hit (draw a card).
    ///
    /// The first hit withdraws double, split and insurance for the rest of
    /// the round. Reaching five cards without going over 21 wins outright;
    /// going over 21 loses without the dealer drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not acting.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure(Action::Hit)?;
        self.round.offers.remove(Actions::FIRST_DECISION);

        let card = self.draw();
        self.round.player.add_card(card);

        let score = self.round.player.score();
        if self.round.player.is_full() && score <= TWENTY_ONE {
            self.settle(0, HandOutcome::Win, Settlement::FiveCards);
            self.finish_round();
        } else if score > TWENTY_ONE {
            self.bust();
        }

        Ok(card)
    }

    /// Player action: Stay (keep the hand and let the dealer play).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not acting.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure(Action::Stay)?;
        self.dealer_play();
        Ok(())
    }

    /// Player action: Double down (stake the bet again, receive exactly one
    /// card, then the dealer plays).
    ///
    /// # Errors
    ///
    /// Returns an error if doubling is not offered (after a hit, or outside
    /// the player's turn) or the bankroll cannot cover the bet again. Nothing
    /// changes on error.
    pub fn double(&mut self) -> Result<Card, ActionError> {
        self.ensure(Action::Double)?;

        let bet = self.ledger.current_bet();
        if let Err(err) = self.ledger.withdraw(bet) {
            return Err(self.reject(err));
        }
        self.round.staked += bet;
        self.round.doubled = true;
        self.round.offers = Actions::empty();
        self.notify_bank();

        let card = self.draw();
        self.round.player.add_card(card);

        if self.round.player.is_bust() {
            self.bust();
        } else {
            self.dealer_play();
        }

        Ok(card)
    }

    /// Player action: Split (turn a pair into two hands, one card drawn to
    /// each, then the dealer plays against both).
    ///
    /// # Errors
    ///
    /// Returns an error if splitting is not offered (no pair, after a hit,
    /// or outside the player's turn) or the bankroll cannot cover a second
    /// bet. Nothing changes on error.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure(Action::Split)?;

        let bet = self.ledger.current_bet();
        if !self.ledger.can_afford(bet) {
            let err = ActionError::InsufficientFunds {
                needed: bet,
                available: self.ledger.bankroll(),
            };
            return Err(self.reject(err));
        }
        let Some(mut second) = self.round.player.split_off() else {
            return Err(self.reject(ActionError::IllegalAction(Action::Split)));
        };

        self.ledger.withdraw(bet)?;
        self.round.staked += bet;
        self.round.offers = Actions::empty();
        self.notify_bank();

        let card = self.draw();
        self.round.player.add_card(card);
        let card = self.draw();
        second.add_card(card);
        self.round.second = Some(second);
        log::debug!("split into two hands");

        self.dealer_play();

        Ok(())
    }

    /// Settles a hand that went over 21; the dealer does not draw.
    fn bust(&mut self) {
        self.notify(Notice::PlayerBust);
        self.settle(0, HandOutcome::Lose, Settlement::PlayerBust);
        self.finish_round();
    }
}
