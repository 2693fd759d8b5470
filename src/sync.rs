//! A table shared between threads.

use crate::deck::{Deck, Shoe};
use crate::error::CommandError;
use crate::game::{Command, Report, Table};
use crate::notice::Sink;

#[cfg(feature = "std")]
struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use spin::Mutex;

/// A [`Table`] behind a single lock.
///
/// Front ends that run each action on its own worker can share one
/// `SharedTable`; the lock guarantees at most one action touches the round
/// and the bank at a time.
///
/// ```
/// use twentyone::{Command, Phase, Table, TableOptions};
/// use twentyone::sync::SharedTable;
///
/// let shared = SharedTable::new(Table::new(TableOptions::default(), 3).unwrap());
/// shared.apply(Command::Bet(2)).unwrap();
/// assert_eq!(shared.with(|table| table.phase()), Phase::Dealing);
/// ```
pub struct SharedTable<D: Deck = Shoe, S: Sink = ()> {
    inner: Mutex<Table<D, S>>,
}

impl<D: Deck, S: Sink> SharedTable<D, S> {
    /// Wraps a table.
    pub const fn new(table: Table<D, S>) -> Self {
        Self {
            inner: Mutex::new(table),
        }
    }

    /// Runs `f` with exclusive access to the table.
    pub fn with<R>(&self, f: impl FnOnce(&mut Table<D, S>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Dispatches one command under the lock.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation.
    pub fn apply(&self, command: Command) -> Result<Report, CommandError> {
        self.with(|table| table.apply(command))
    }

    /// Returns a snapshot of the table.
    pub fn report(&self) -> Report {
        self.with(|table| table.report())
    }

    /// Unwraps the table.
    pub fn into_inner(self) -> Table<D, S> {
        self.inner.into_inner()
    }
}
