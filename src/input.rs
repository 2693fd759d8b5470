//! Bet entry helpers for front ends.
//!
//! These mirror what a bet prompt needs: the amount to pre-fill, how to read
//! what the player typed, and how a spinner steps between the limits.

use crate::error::BetError;
use crate::options::TableOptions;

/// Checks `amount` against the table limits and the bankroll.
///
/// # Errors
///
/// Returns the first limit the amount breaks: the minimum, the maximum,
/// then the bankroll.
pub const fn validate_bet(
    options: &TableOptions,
    bankroll: usize,
    amount: usize,
) -> Result<(), BetError> {
    if amount < options.minimum_bet {
        Err(BetError::BelowMinimum {
            minimum: options.minimum_bet,
        })
    } else if amount > options.maximum_bet {
        Err(BetError::AboveMaximum {
            maximum: options.maximum_bet,
        })
    } else if amount > bankroll {
        Err(BetError::ExceedsBank { bankroll })
    } else {
        Ok(())
    }
}

/// Returns the largest bet the player can place right now.
#[must_use]
pub fn max_bet(options: &TableOptions, bankroll: usize) -> usize {
    options.maximum_bet.min(bankroll)
}

/// Returns the amount a bet prompt starts with.
///
/// ```
/// use twentyone::{TableOptions, input};
///
/// let options = TableOptions::default().with_maximum_bet(20);
/// assert_eq!(input::default_bet(&options, 12), 1);
/// assert_eq!(input::default_bet(&options.with_bet_max_default(true), 12), 12);
/// ```
#[must_use]
pub fn default_bet(options: &TableOptions, bankroll: usize) -> usize {
    if options.bet_max_default {
        max_bet(options, bankroll)
    } else {
        options.minimum_bet
    }
}

/// Reads a typed bet.
///
/// Blank input counts as 0 and negative amounts are raised to 0, so both
/// fail the minimum check.
///
/// # Errors
///
/// Returns [`BetError::Malformed`] for text that is not a whole number, or
/// the error from [`validate_bet`].
pub fn parse_bet(text: &str, options: &TableOptions, bankroll: usize) -> Result<usize, BetError> {
    let text = text.trim();
    let amount = if text.is_empty() {
        0
    } else {
        let value: i64 = text.parse().map_err(|_| BetError::Malformed)?;
        usize::try_from(value.max(0)).map_err(|_| BetError::Malformed)?
    };

    validate_bet(options, bankroll, amount)?;
    Ok(amount)
}

/// Steps a spinner showing `text` one unit up or down within
/// `lower..=upper`.
///
/// Values outside the range snap to the nearest bound; unreadable text
/// resets to `lower`.
///
/// ```
/// use twentyone::input;
///
/// assert_eq!(input::step_bet("4", true, 1, 5), 5);
/// assert_eq!(input::step_bet("5", true, 1, 5), 5);
/// assert_eq!(input::step_bet("1", false, 1, 5), 1);
/// assert_eq!(input::step_bet("abc", true, 1, 5), 1);
/// ```
#[must_use]
pub fn step_bet(text: &str, up: bool, lower: usize, upper: usize) -> usize {
    let Ok(choice) = text.trim().parse::<i64>() else {
        log::debug!("unreadable bet {text:?}, resetting to {lower}");
        return lower;
    };

    let lower_i = i64::try_from(lower).unwrap_or(i64::MAX);
    let upper_i = i64::try_from(upper).unwrap_or(i64::MAX);

    if choice > upper_i || (choice == upper_i && up) {
        upper
    } else if choice < lower_i || (choice == lower_i && !up) {
        lower
    } else if up {
        (choice + 1) as usize
    } else {
        (choice - 1) as usize
    }
}
