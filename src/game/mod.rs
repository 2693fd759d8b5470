//! Table engine and round state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{Deck, Shoe};
use crate::error::{ActionError, CommandError, OptionsError};
use crate::hand::{DealerHand, Hand};
use crate::ledger::BankLedger;
use crate::notice::{Notice, Sink};
use crate::options::TableOptions;
use crate::result::{HandResult, RoundResult};

mod actions;
mod bet;
mod command;
mod dealer;
mod insurance;
pub mod state;

pub use command::Command;
pub use state::{Action, Actions, Phase};

/// The shoe is reshuffled before a deal once this few cards remain.
pub const RESHUFFLE_THRESHOLD: usize = 9;

/// State of the round in progress.
#[derive(Debug, Clone, Default)]
struct Round {
    phase: Phase,
    /// Choices left to the player while in [`Phase::PlayerActing`].
    offers: Actions,
    dealer: DealerHand,
    player: Hand,
    /// The split-off hand, present only in a split round.
    second: Option<Hand>,
    doubled: bool,
    insurance_cost: usize,
    /// Bankroll before the bet was taken at the deal.
    opening_bankroll: usize,
    staked: usize,
    results: Vec<HandResult>,
    result: Option<RoundResult>,
}

/// Snapshot of everything a front end shows between actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Current phase.
    pub phase: Phase,
    /// Actions the table will accept next.
    pub actions: Actions,
    /// Current bankroll.
    pub bankroll: usize,
    /// Current bet (0 between rounds).
    pub bet: usize,
    /// Cards left in the shoe.
    pub cards_left: usize,
    /// Dealer total as the player can see it.
    pub dealer_score: u8,
    /// Player total (first hand after a split).
    pub player_score: u8,
    /// Total of the split-off hand, if any.
    pub split_score: Option<u8>,
}

/// A Twenty-One table: one player against the dealer.
///
/// The table owns the deck, the bank ledger and the round in progress.
/// Every action takes `&mut self`, so actions are processed one at a time;
/// wrap the table in a [`SharedTable`](crate::sync::SharedTable) to share it
/// between threads.
///
/// Rejected actions leave the table unchanged and are reported both as an
/// `Err` and as [`Notice::Rejected`] to the sink.
#[derive(Debug)]
pub struct Table<D: Deck = Shoe, S: Sink = ()> {
    options: TableOptions,
    deck: D,
    sink: S,
    ledger: BankLedger,
    round: Round,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe and no sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Phase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42).unwrap();
    /// assert_eq!(table.phase(), Phase::AwaitingBet);
    /// assert_eq!(table.bankroll(), 100);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_parts(options, Shoe::new(options.decks, seed), ())
    }
}

impl<D: Deck, S: Sink> Table<D, S> {
    /// Creates a table from its collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of range.
    pub fn with_parts(options: TableOptions, deck: D, sink: S) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            deck,
            sink,
            ledger: BankLedger::new(options.initial_bank),
            round: Round::default(),
        })
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the bank ledger.
    pub const fn ledger(&self) -> &BankLedger {
        &self.ledger
    }

    /// Returns the current bankroll.
    pub const fn bankroll(&self) -> usize {
        self.ledger.bankroll()
    }

    /// Returns the current bet (0 between rounds).
    pub const fn bet(&self) -> usize {
        self.ledger.current_bet()
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Returns the actions the table accepts in its current state.
    pub fn legal_actions(&self) -> Actions {
        match self.round.phase {
            Phase::AwaitingBet if self.needs_top_up() => Actions::BET | Actions::TOP_UP,
            Phase::AwaitingBet => Actions::BET,
            Phase::Dealing => Actions::DEAL,
            Phase::PlayerActing => self.round.offers,
            Phase::DealerResolving => Actions::empty(),
            Phase::RoundComplete => Actions::CLEAR_ROUND,
        }
    }

    /// Returns whether the bankroll has dropped below the minimum bet.
    pub const fn needs_top_up(&self) -> bool {
        self.ledger.bankroll() < self.options.minimum_bet
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.round.dealer
    }

    /// Returns the player's hand (the first hand after a split).
    pub const fn player_hand(&self) -> &Hand {
        &self.round.player
    }

    /// Returns the split-off hand, if the round was split.
    pub const fn split_hand(&self) -> Option<&Hand> {
        self.round.second.as_ref()
    }

    /// Returns whether the round was split.
    pub const fn is_split(&self) -> bool {
        self.round.second.is_some()
    }

    /// Returns whether the bet was doubled this round.
    pub const fn is_doubled(&self) -> bool {
        self.round.doubled
    }

    /// Returns the insurance cost paid this round (0 if none).
    pub const fn insurance_cost(&self) -> usize {
        self.round.insurance_cost
    }

    /// Returns the result of the round once it is complete.
    pub const fn result(&self) -> Option<&RoundResult> {
        self.round.result.as_ref()
    }

    /// Returns the number of cards left in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the notice sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the notice sink mutably (e.g. to drain collected notices).
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns a snapshot for redrawing a front end.
    pub fn report(&self) -> Report {
        Report {
            phase: self.round.phase,
            actions: self.legal_actions(),
            bankroll: self.ledger.bankroll(),
            bet: self.ledger.current_bet(),
            cards_left: self.deck.remaining(),
            dealer_score: self.round.dealer.visible_score(),
            player_score: self.round.player.score(),
            split_score: self.round.second.as_ref().map(Hand::score),
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.sink.notice(&notice);
    }

    fn notify_bank(&mut self) {
        let notice = Notice::Bank {
            bankroll: self.ledger.bankroll(),
            bet: self.ledger.current_bet(),
        };
        self.notify(notice);
    }

    /// Reports a rejected command and hands the error back.
    fn reject<E: Copy + Into<CommandError>>(&mut self, err: E) -> E {
        let err_for_sink: CommandError = err.into();
        log::warn!("rejected in {:?}: {err_for_sink}", self.round.phase);
        self.notify(Notice::Rejected(err_for_sink));
        err
    }

    /// Fails with [`ActionError::IllegalAction`] unless `action` is legal now.
    fn ensure(&mut self, action: Action) -> Result<(), ActionError> {
        if self.legal_actions().allows(action) {
            Ok(())
        } else {
            Err(self.reject(ActionError::IllegalAction(action)))
        }
    }

    fn draw(&mut self) -> Card {
        let card = self.deck.next_card();
        let remaining = self.deck.remaining();
        log::debug!("drew {card}, {remaining} cards left");
        self.notify(Notice::CardsLeft(remaining));
        card
    }

    const fn player_hand_at(&self, index: usize) -> Option<&Hand> {
        match index {
            0 => Some(&self.round.player),
            1 => self.round.second.as_ref(),
            _ => None,
        }
    }
}
