//! Scoring, hand, option and bet-entry tests.

use twentyone::{
    BetError, Card, DealerHand, Deck, HAND_CAPACITY, Hand, HandOutcome, OptionsError, Shoe, Suit,
    TableOptions, input, ledger, score,
};

const fn card(rank: u8) -> Card {
    Card::new(Suit::Hearts, rank)
}

fn hand(ranks: &[u8]) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&rank| card(rank)).collect();
    Hand::from_cards(&cards)
}

#[test]
fn score_without_aces_is_the_capped_sum() {
    assert_eq!(hand(&[2, 3, 4]).score(), 9);
    assert_eq!(hand(&[10, 9]).score(), 19);
    assert_eq!(hand(&[11, 12, 13]).score(), 30);
    assert_eq!(hand(&[]).score(), 0);
}

#[test]
fn single_ace_is_promoted_when_it_fits() {
    assert_eq!(hand(&[1, 5]).score(), 16);
    assert_eq!(hand(&[1, 13]).score(), 21);
    assert_eq!(hand(&[1, 5, 9]).score(), 15);
    assert_eq!(hand(&[1, 2, 3, 4]).score(), 20);
}

#[test]
fn only_one_ace_is_promoted() {
    assert_eq!(hand(&[1, 1]).score(), 12);
    assert_eq!(hand(&[1, 1, 10]).score(), 12);
    assert_eq!(hand(&[1, 1, 9]).score(), 21);
}

#[test]
fn scoring_stops_at_the_first_empty_slot() {
    let slots = [Some(card(5)), None, Some(card(9))];
    assert_eq!(score::score(&slots), 5);
}

#[test]
fn natural_needs_exactly_two_cards() {
    assert!(hand(&[1, 12]).is_natural());
    assert!(!hand(&[7, 7, 7]).is_natural());
    assert!(!hand(&[10, 10]).is_natural());
}

#[test]
fn hand_holds_at_most_five_cards() {
    let mut full = hand(&[2, 2, 2, 2, 2, 2]);
    assert_eq!(full.len(), HAND_CAPACITY);
    assert!(full.is_full());
    assert!(!full.add_card(card(3)));
    assert_eq!(full.score(), 10);

    full.clear();
    assert!(full.is_empty());
}

#[test]
fn pairs_match_on_rank() {
    assert!(hand(&[8, 8]).is_pair());
    assert!(hand(&[13, 13]).is_pair());
    assert!(!hand(&[8, 9]).is_pair());
    assert!(!hand(&[12, 13]).is_pair(), "faces of different rank");
    assert!(!hand(&[8, 8, 2]).is_pair());
}

#[test]
fn split_off_moves_the_second_card() {
    let mut first = hand(&[8, 8]);
    let second = first.split_off().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(second.card(0), Some(card(8)));

    let mut three = hand(&[2, 3, 4]);
    assert!(three.split_off().is_none());
    assert_eq!(three.len(), 3);
}

#[test]
fn dealer_hides_the_hole_card() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(10));
    dealer.add_card(card(1));

    assert_eq!(dealer.hole_card(), Some(card(10)));
    assert_eq!(dealer.up_card(), Some(card(1)));
    assert_eq!(dealer.visible_score(), 11);
    assert_eq!(dealer.score(), 21);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_score(), 21);
}

#[test]
fn shoe_holds_full_decks_and_rebuilds_when_empty() {
    let mut shoe = Shoe::new(2, 9);
    assert_eq!(shoe.remaining(), 104);

    for _ in 0..104 {
        shoe.next_card();
    }
    assert_eq!(shoe.remaining(), 0);

    let card = shoe.next_card();
    assert!((1..=13).contains(&card.rank));
    assert_eq!(shoe.remaining(), 103);
}

#[test]
fn shoe_always_holds_at_least_one_deck() {
    let mut shoe = Shoe::new(0, 1);
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.remaining(), 52);

    let drawn: Vec<Card> = (0..52).map(|_| shoe.next_card()).collect();
    let aces_of_spades = drawn
        .iter()
        .filter(|card| **card == Card::new(Suit::Spades, 1))
        .count();
    assert_eq!(aces_of_spades, 1);
}

#[test]
fn same_seed_deals_the_same_cards() {
    let mut a = Shoe::new(1, 77);
    let mut b = Shoe::new(1, 77);
    let from_a: Vec<Card> = (0..10).map(|_| a.next_card()).collect();
    let from_b: Vec<Card> = (0..10).map(|_| b.next_card()).collect();
    assert_eq!(from_a, from_b);
}

#[test]
fn stacked_shoe_deals_the_given_cards_first() {
    let mut shoe = Shoe::stacked(1, 1, &[card(4), card(9)]);
    assert_eq!(shoe.remaining(), 54);
    assert_eq!(shoe.next_card(), card(4));
    assert_eq!(shoe.next_card(), card(9));
}

#[test]
fn options_are_range_checked() {
    assert!(TableOptions::default().validate().is_ok());
    assert_eq!(
        TableOptions::default().with_minimum_bet(0).validate(),
        Err(OptionsError::MinimumBet)
    );
    assert_eq!(
        TableOptions::default()
            .with_minimum_bet(10)
            .with_maximum_bet(5)
            .validate(),
        Err(OptionsError::MaximumBet)
    );
    assert_eq!(
        TableOptions::default().with_maximum_bet(10_001).validate(),
        Err(OptionsError::MaximumBet)
    );
    assert_eq!(
        TableOptions::default().with_initial_bank(100_001).validate(),
        Err(OptionsError::InitialBank)
    );
    assert_eq!(
        TableOptions::default().with_decks(8).validate(),
        Err(OptionsError::Decks)
    );
    assert!(twentyone::Table::new(TableOptions::default().with_decks(0), 1).is_err());
}

#[test]
fn missing_properties_use_defaults() {
    let options = TableOptions::from_properties([]);
    assert_eq!(options, TableOptions::default());
}

#[test]
fn bad_properties_fall_back_safely() {
    let options = TableOptions::from_properties([
        ("MinimumBet", "20"),
        ("MaximumBet", "3"),
        ("InitialBank", "-4"),
        ("NumDecks", "12"),
        ("Unrelated", "1"),
    ]);
    assert_eq!(options.minimum_bet, 20);
    assert_eq!(options.maximum_bet, 20);
    assert_eq!(options.initial_bank, 100);
    assert_eq!(options.decks, 1);
    assert!(!options.bet_max_default);
    assert!(options.validate().is_ok());

    let options = TableOptions::from_properties([("MinimumBet", "2"), ("MaximumBet", "-3")]);
    assert_eq!(options.maximum_bet, 2);
    let options = TableOptions::from_properties([("MinimumBet", "8"), ("MaximumBet", "lots")]);
    assert_eq!(options.maximum_bet, 8);

    let options = TableOptions::from_properties([
        ("TwentyOne.MinimumBet", "500"),
        ("TwentyOne.InitialBank", "200"),
        ("TwentyOne.NumDecks", "3"),
    ]);
    assert_eq!(options.maximum_bet, 500);
    assert_eq!(options.initial_bank, 500);
    assert_eq!(options.decks, 3);
    assert!(options.validate().is_ok());
}

#[test]
fn typed_bets_are_parsed_and_checked() {
    let options = TableOptions::default().with_maximum_bet(50);

    assert_eq!(input::parse_bet(" 25 ", &options, 100), Ok(25));
    assert_eq!(
        input::parse_bet("", &options, 100),
        Err(BetError::BelowMinimum { minimum: 1 })
    );
    assert_eq!(
        input::parse_bet("-7", &options, 100),
        Err(BetError::BelowMinimum { minimum: 1 })
    );
    assert_eq!(
        input::parse_bet("ten", &options, 100),
        Err(BetError::Malformed)
    );
    assert_eq!(
        input::parse_bet("60", &options, 100),
        Err(BetError::AboveMaximum { maximum: 50 })
    );
    assert_eq!(
        input::parse_bet("40", &options, 30),
        Err(BetError::ExceedsBank { bankroll: 30 })
    );
}

#[test]
fn bet_prompt_limits_follow_the_bankroll() {
    let options = TableOptions::default().with_maximum_bet(50);
    assert_eq!(input::max_bet(&options, 30), 30);
    assert_eq!(input::max_bet(&options, 300), 50);
    assert_eq!(input::default_bet(&options, 30), 1);
    assert_eq!(input::default_bet(&options.with_bet_max_default(true), 30), 30);
}

#[test]
fn spinner_steps_within_bounds() {
    assert_eq!(input::step_bet("3", true, 1, 5), 4);
    assert_eq!(input::step_bet("3", false, 1, 5), 2);
    assert_eq!(input::step_bet("9", false, 1, 5), 5);
    assert_eq!(input::step_bet("-2", true, 1, 5), 1);
    assert_eq!(input::step_bet("", false, 1, 5), 1);
}

#[test]
fn payouts_by_outcome() {
    assert_eq!(ledger::payout(HandOutcome::Win, 5, false), 10);
    assert_eq!(ledger::payout(HandOutcome::Win, 5, true), 20);
    assert_eq!(ledger::payout(HandOutcome::Push, 5, false), 5);
    assert_eq!(ledger::payout(HandOutcome::Push, 5, true), 10);
    assert_eq!(ledger::payout(HandOutcome::Lose, 5, true), 0);
    assert_eq!(ledger::payout(HandOutcome::Insured, 5, false), 5);
}

#[test]
fn ledger_never_goes_negative() {
    let mut bank = twentyone::BankLedger::new(10);
    assert!(bank.withdraw(11).is_err());
    assert_eq!(bank.bankroll(), 10);
    bank.withdraw(10).unwrap();
    assert_eq!(bank.bankroll(), 0);
    assert_eq!(bank.top_up(), 10);
}
