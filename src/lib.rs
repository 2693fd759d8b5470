//! A Twenty-One rules engine with optional `no_std` support.
//!
//! Twenty-One is a blackjack variant played one player against the dealer:
//! naturals pay even money, five cards without busting win outright, a pair
//! may be split once, and insurance costs a quarter of the bet.
//!
//! The crate provides a [`Table`] that runs the round state machine (bet,
//! deal, player actions, dealer play, settlement) and keeps the bankroll in
//! a [`BankLedger`]. Cards come from any [`Deck`]; outcome messages go to any
//! [`Sink`].
//!
//! # Example
//!
//! ```
//! use twentyone::{Phase, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42).unwrap();
//! table.accept_bet(5).unwrap();
//! table.deal().unwrap();
//! if table.phase() == Phase::PlayerActing {
//!     table.stay().unwrap();
//! }
//! assert_eq!(table.phase(), Phase::RoundComplete);
//! let _ = table.result();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod ledger;
pub mod notice;
pub mod options;
pub mod result;
pub mod score;
pub mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, Shoe};
pub use error::{ActionError, BetError, CommandError, OptionsError};
pub use game::{Action, Actions, Command, Phase, RESHUFFLE_THRESHOLD, Report, Table};
pub use hand::{DealerHand, HAND_CAPACITY, Hand};
pub use ledger::BankLedger;
pub use notice::{Notice, Sink};
pub use options::TableOptions;
pub use result::{HandOutcome, HandResult, Participant, RoundResult, Settlement};
pub use sync::SharedTable;
