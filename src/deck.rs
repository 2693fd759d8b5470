//! Card supply for the table.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A source of shuffled cards.
///
/// The table shuffles whenever [`Deck::remaining`] drops to the reshuffle
/// threshold before a new deal.
pub trait Deck {
    /// Restores and shuffles the full set of cards.
    fn shuffle(&mut self);

    /// Draws the next card.
    fn next_card(&mut self) -> Card;

    /// Returns the number of cards left before the next shuffle.
    fn remaining(&self) -> usize;
}

/// A seeded shoe of one or more 52-card decks.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe with the given number of decks (at least one).
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Creates a shuffled shoe whose next draws are `draws`, in order.
    ///
    /// The rest of the shoe follows underneath, so the reshuffle threshold
    /// is not reached by the stacked cards alone.
    #[must_use]
    pub fn stacked(decks: u8, seed: u64, draws: &[Card]) -> Self {
        let mut shoe = Self::new(decks, seed);
        shoe.cards.extend(draws.iter().rev());
        shoe
    }

    fn build(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}

impl Deck for Shoe {
    fn shuffle(&mut self) {
        self.cards = Self::build(self.decks, &mut self.rng);
    }

    fn next_card(&mut self) -> Card {
        if let Some(card) = self.cards.pop() {
            return card;
        }
        log::debug!("shoe exhausted mid-round, rebuilding");
        self.shuffle();
        // A rebuilt shoe always holds at least one deck.
        self.cards.pop().unwrap_or(Card::new(Suit::Spades, 1))
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
