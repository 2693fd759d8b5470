//! Table configuration options.

use crate::error::OptionsError;

/// Smallest minimum bet a table accepts.
pub const MIN_BET_AMOUNT: usize = 1;
/// Largest bet a table accepts.
pub const MAX_BET_AMOUNT: usize = 10_000;
/// Largest initial bank a table accepts.
pub const MAX_INITIAL_BANK: usize = 100_000;
/// Most decks a shoe may hold.
pub const MAX_DECKS: u8 = 7;

const DEFAULT_MAXIMUM_BET: usize = 5;
const DEFAULT_INITIAL_BANK: usize = 100;
const DEFAULT_DECKS: u8 = 1;

const PROPERTY_PREFIX: &str = "TwentyOne.";

/// Configuration options for a Twenty-One table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_minimum_bet(5)
///     .with_maximum_bet(50)
///     .with_initial_bank(500)
///     .with_decks(2);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableOptions {
    /// Minimum bet per round.
    pub minimum_bet: usize,
    /// Maximum bet per round.
    pub maximum_bet: usize,
    /// Bank given at the start of a session and on each top-up.
    pub initial_bank: usize,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether bet entry defaults to the maximum affordable bet.
    pub bet_max_default: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            minimum_bet: MIN_BET_AMOUNT,
            maximum_bet: DEFAULT_MAXIMUM_BET,
            initial_bank: DEFAULT_INITIAL_BANK,
            decks: DEFAULT_DECKS,
            bet_max_default: false,
        }
    }
}

impl TableOptions {
    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_minimum_bet(2);
    /// assert_eq!(options.minimum_bet, 2);
    /// ```
    #[must_use]
    pub const fn with_minimum_bet(mut self, amount: usize) -> Self {
        self.minimum_bet = amount;
        self
    }

    /// Sets the maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_maximum_bet(25);
    /// assert_eq!(options.maximum_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_maximum_bet(mut self, amount: usize) -> Self {
        self.maximum_bet = amount;
        self
    }

    /// Sets the initial bank.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_initial_bank(250);
    /// assert_eq!(options.initial_bank, 250);
    /// ```
    #[must_use]
    pub const fn with_initial_bank(mut self, amount: usize) -> Self {
        self.initial_bank = amount;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether bet entry defaults to the maximum.
    #[must_use]
    pub const fn with_bet_max_default(mut self, bet_max: bool) -> Self {
        self.bet_max_default = bet_max;
        self
    }

    /// Checks every field against its permitted range.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.minimum_bet < MIN_BET_AMOUNT || self.minimum_bet > MAX_BET_AMOUNT {
            return Err(OptionsError::MinimumBet);
        }
        if self.maximum_bet < self.minimum_bet || self.maximum_bet > MAX_BET_AMOUNT {
            return Err(OptionsError::MaximumBet);
        }
        if self.initial_bank < self.minimum_bet || self.initial_bank > MAX_INITIAL_BANK {
            return Err(OptionsError::InitialBank);
        }
        if self.decks < 1 || self.decks > MAX_DECKS {
            return Err(OptionsError::Decks);
        }
        Ok(())
    }

    /// Builds options from `key=value` style properties.
    ///
    /// Recognised keys are `MinimumBet`, `MaximumBet`, `InitialBank`,
    /// `NumDecks` and `BetMax`, optionally prefixed with `TwentyOne.`.
    /// Unparsable or out-of-range values fall back to safe defaults, so the
    /// result always passes [`TableOptions::validate`].
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::from_properties([
    ///     ("TwentyOne.MinimumBet", "10"),
    ///     ("TwentyOne.MaximumBet", "oops"),
    ///     ("TwentyOne.BetMax", "yes"),
    /// ]);
    /// assert_eq!(options.minimum_bet, 10);
    /// assert_eq!(options.maximum_bet, 10);
    /// assert!(options.bet_max_default);
    /// ```
    #[must_use]
    pub fn from_properties<'a>(properties: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut minimum = None;
        let mut maximum = None;
        let mut bank = None;
        let mut decks = None;
        let mut bet_max = false;

        for (key, value) in properties {
            let key = key.trim();
            let key = key.strip_prefix(PROPERTY_PREFIX).unwrap_or(key);
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                "MinimumBet" => minimum = Some(value),
                "MaximumBet" => maximum = Some(value),
                "InitialBank" => bank = Some(value),
                "NumDecks" => decks = Some(value),
                "BetMax" => bet_max = true,
                _ => log::debug!("ignoring unknown table property {key}"),
            }
        }

        let minimum_bet = minimum
            .and_then(|value| value.parse().ok())
            .filter(|amount| (MIN_BET_AMOUNT..=MAX_BET_AMOUNT).contains(amount))
            .unwrap_or(MIN_BET_AMOUNT);

        let maximum_bet = maximum.map_or(DEFAULT_MAXIMUM_BET.max(minimum_bet), |value| {
            // A readable negative amount is out of range, not unreadable.
            let amount = match value.parse::<i64>() {
                Ok(amount) => usize::try_from(amount).unwrap_or(0),
                Err(_) => DEFAULT_MAXIMUM_BET,
            };
            if (minimum_bet..=MAX_BET_AMOUNT).contains(&amount) {
                amount
            } else {
                minimum_bet
            }
        });

        let initial_bank = bank
            .and_then(|value| value.parse().ok())
            .filter(|amount| (minimum_bet..=MAX_INITIAL_BANK).contains(amount))
            .unwrap_or(DEFAULT_INITIAL_BANK)
            .max(minimum_bet);

        let decks = decks
            .and_then(|value| value.parse().ok())
            .filter(|count| (1..=MAX_DECKS).contains(count))
            .unwrap_or(DEFAULT_DECKS);

        Self {
            minimum_bet,
            maximum_bet,
            initial_bank,
            decks,
            bet_max_default: bet_max,
        }
    }
}
