use core::cmp::Ordering;

use crate::deck::Deck;
use crate::hand::{HAND_CAPACITY, Hand};
use crate::notice::{Notice, Sink};
use crate::result::{HandOutcome, HandResult, Participant, RoundResult, Settlement};
use crate::score::TWENTY_ONE;

use super::{Actions, Phase, Table};

/// The dealer draws while at or below this total.
const DEALER_DRAWS_TO: u8 = 16;

impl<D: Deck, S: Sink> Table<D, S> {
    /// Dealer reveals the hole card, draws while on 16 or less with fewer
    /// than five cards, then settles every player hand.
    ///
    /// The dealer stops drawing as soon as the total passes 16, bust or not.
    /// Five cards only win for the dealer when the total is still 21 or less.
    pub(super) fn dealer_play(&mut self) {
        self.round.phase = Phase::DealerResolving;
        self.round.offers = Actions::empty();
        self.round.dealer.reveal_hole();

        while self.round.dealer.score() <= DEALER_DRAWS_TO && self.round.dealer.len() < HAND_CAPACITY
        {
            let card = self.draw();
            self.round.dealer.add_card(card);
        }

        let dealer = self.round.dealer.score();
        let split = self.round.second.is_some();
        let scores = [
            Some(self.round.player.score()),
            self.round.second.as_ref().map(Hand::score),
        ];
        let hands = scores
            .into_iter()
            .enumerate()
            .filter_map(|(index, score)| score.map(|score| (index, score)));

        if dealer > TWENTY_ONE {
            self.notify(Notice::DealerBust);
        }

        for (index, player) in hands {
            if split {
                self.notify(Notice::SplitHand(index + 1));
            }

            let (outcome, settlement) = if dealer > TWENTY_ONE {
                (HandOutcome::Win, Settlement::DealerBust)
            } else if self.round.dealer.hand().is_full() {
                (HandOutcome::Lose, Settlement::FiveCards)
            } else {
                let outcome = match player.cmp(&dealer) {
                    Ordering::Greater => HandOutcome::Win,
                    Ordering::Equal => HandOutcome::Push,
                    Ordering::Less => HandOutcome::Lose,
                };
                (outcome, Settlement::Showdown)
            };

            self.settle(index, outcome, settlement);
        }

        self.finish_round();
    }

    /// Pays out one player hand and records its result.
    pub(super) fn settle(&mut self, hand_index: usize, outcome: HandOutcome, settlement: Settlement) {
        let player_value = self.player_hand_at(hand_index).map_or(0, Hand::score);
        let dealer_value = self.round.dealer.score();
        let bet = self.ledger.current_bet();
        let doubled = self.round.doubled;
        let payout = self.ledger.apply_result(outcome, bet, doubled);

        let notice = match (outcome, settlement) {
            (HandOutcome::Push, _) => Notice::Push,
            (HandOutcome::Win, Settlement::FiveCards) => Notice::FiveCards {
                winner: Participant::Player,
            },
            (HandOutcome::Lose, Settlement::FiveCards) => Notice::FiveCards {
                winner: Participant::Dealer,
            },
            (HandOutcome::Win, _) => Notice::Won {
                winner: Participant::Player,
                points: player_value,
            },
            (HandOutcome::Lose | HandOutcome::Insured, _) => Notice::Won {
                winner: Participant::Dealer,
                points: dealer_value,
            },
        };

        log::info!(
            "hand {hand_index}: {outcome:?} by {settlement:?} ({player_value} vs {dealer_value}), paid {payout}"
        );

        self.round.results.push(HandResult {
            hand_index,
            outcome,
            settlement,
            bet,
            doubled,
            payout,
            player_value,
            dealer_value,
        });

        self.notify(notice);
        self.notify_bank();
    }

    /// Reveals the dealer's hand and closes the round.
    pub(super) fn finish_round(&mut self) {
        self.round.dealer.reveal_hole();
        self.round.phase = Phase::RoundComplete;
        self.round.offers = Actions::empty();

        let hands = core::mem::take(&mut self.round.results);
        let total_payout = hands.iter().map(|hand| hand.payout).sum();
        let result = RoundResult {
            hands,
            dealer_value: self.round.dealer.score(),
            insurance_cost: self.round.insurance_cost,
            opening_bankroll: self.round.opening_bankroll,
            staked: self.round.staked,
            total_payout,
            bankroll: self.ledger.bankroll(),
        };

        log::info!(
            "round settled: net {}, bankroll {}",
            result.net(),
            result.bankroll
        );
        self.round.result = Some(result);
    }
}
