//! CLI Twenty-One example.
//!
//! Run with `RUST_LOG=debug` to see the table's own logging.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Actions, Card, Command, DealerHand, Hand, Notice, Phase, Shoe, Sink, Suit, Table,
    TableOptions, input,
};

/// Prints the notices a player cares about as they happen.
struct Console;

impl Sink for Console {
    fn notice(&mut self, notice: &Notice) {
        match notice {
            Notice::CardsLeft(_) | Notice::Bank { .. } => {}
            Notice::Rejected(err) => println!("{}", colorize(&err.to_string(), "33")),
            _ => println!("{notice}"),
        }
    }
}

fn main() {
    env_logger::init();
    println!("Twenty-One CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let properties: Vec<(String, String)> = std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect();
    let options = TableOptions::from_properties(
        properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );

    let deck = Shoe::new(options.decks, seed);
    let mut table = match Table::with_parts(options, deck, Console) {
        Ok(table) => table,
        Err(err) => {
            println!("Bad table options: {err}");
            return;
        }
    };

    loop {
        if table.needs_top_up() {
            match prompt_line("Your bank is empty. Top up? (y/n): ").as_str() {
                "y" | "yes" => match table.apply(Command::TopUp) {
                    Ok(report) => println!("Bank topped up to {}.", report.bankroll),
                    Err(err) => println!("Top-up error: {err}"),
                },
                _ => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        let bankroll = table.bankroll();
        let max = input::max_bet(table.options(), bankroll);
        let default = input::default_bet(table.options(), bankroll);
        println!("\nBank: {bankroll}");
        let text = prompt_line(&format!(
            "Bet ({}-{max}, enter for {default}, q to quit): ",
            table.options().minimum_bet
        ));
        if text == "q" || text == "quit" {
            println!("Goodbye.");
            break;
        }

        let amount = if text.is_empty() {
            default
        } else {
            match input::parse_bet(&text, table.options(), bankroll) {
                Ok(amount) => amount,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            }
        };

        if table.apply(Command::Bet(amount)).is_err() || table.apply(Command::Deal).is_err() {
            continue;
        }

        while table.phase() == Phase::PlayerActing {
            print_table(&table);
            println!("{}", format_actions(table.legal_actions()));

            let command = match prompt_line("Action: ").as_str() {
                "h" | "hit" => Command::Hit,
                "s" | "stay" => Command::Stay,
                "d" | "double" => Command::Double,
                "p" | "split" => Command::Split,
                "i" | "insurance" => Command::Insurance,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            // Rejections are already printed by the sink.
            let _ = table.apply(command);
        }

        print_table(&table);
        if let Some(result) = table.result() {
            println!(
                "Round complete. Paid {} (net {})",
                result.total_payout,
                result.net()
            );
        }
        if let Err(err) = table.apply(Command::ClearRound) {
            println!("Clear error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table<S: Sink>(table: &Table<Shoe, S>) {
    let report = table.report();
    println!("\nCards left: {}", report.cards_left);

    let dealer = table.dealer_hand();
    println!(
        "Dealer: {} (value {})",
        format_dealer(dealer),
        report.dealer_score
    );

    println!(
        "You:    {} (value {})",
        format_hand(table.player_hand()),
        report.player_score
    );
    if let Some(second) = table.split_hand() {
        println!(
            "Split:  {} (value {})",
            format_hand(second),
            second.score()
        );
    }
    println!("Bank: {}  Bet: {}", report.bankroll, report.bet);
}

fn format_actions(actions: Actions) -> String {
    let parts = [
        format_action("hit", "h", actions.contains(Actions::HIT)),
        format_action("stay", "s", actions.contains(Actions::STAY)),
        format_action("double", "d", actions.contains(Actions::DOUBLE)),
        format_action("split", "p", actions.contains(Actions::SPLIT)),
        format_action("insurance", "i", actions.contains(Actions::INSURANCE)),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        format_hand(dealer.hand())
    } else {
        let up = dealer.up_card().map_or_else(String::new, |card| format_card(&card));
        format!("?? {up}")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .map(|card| format_card(&card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
