use crate::deck::Deck;
use crate::error::CommandError;
use crate::notice::Sink;

use super::{Action, Report, Table};

/// A request from the front end, dispatched with [`Table::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Place a bet of the given amount.
    Bet(usize),
    /// Deal the initial cards.
    Deal,
    /// Draw a card.
    Hit,
    /// Stand and let the dealer play.
    Stay,
    /// Double down.
    Double,
    /// Split the pair.
    Split,
    /// Take insurance.
    Insurance,
    /// Refill an exhausted bankroll.
    TopUp,
    /// Clear the finished round.
    ClearRound,
}

impl Command {
    /// Returns the action this command performs.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::Bet(_) => Action::Bet,
            Self::Deal => Action::Deal,
            Self::Hit => Action::Hit,
            Self::Stay => Action::Stay,
            Self::Double => Action::Double,
            Self::Split => Action::Split,
            Self::Insurance => Action::Insurance,
            Self::TopUp => Action::TopUp,
            Self::ClearRound => Action::ClearRound,
        }
    }
}

impl<D: Deck, S: Sink> Table<D, S> {
    /// Runs one command and returns the table state afterwards.
    ///
    /// ```
    /// use twentyone::{Command, Phase, Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default(), 7).unwrap();
    /// let report = table.apply(Command::Bet(5)).unwrap();
    /// assert_eq!(report.phase, Phase::Dealing);
    /// assert!(table.apply(Command::Hit).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation; the table is unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Report, CommandError> {
        match command {
            Command::Bet(amount) => self.accept_bet(amount)?,
            Command::Deal => {
                self.deal()?;
            }
            Command::Hit => {
                self.hit()?;
            }
            Command::Stay => self.stay()?,
            Command::Double => {
                self.double()?;
            }
            Command::Split => self.split()?,
            Command::Insurance => {
                self.insurance()?;
            }
            Command::TopUp => {
                self.top_up()?;
            }
            Command::ClearRound => self.clear_round()?,
        }
        Ok(self.report())
    }
}
