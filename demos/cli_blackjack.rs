//! CLI blackjack example.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, DealerStep, Game, GameOptions, Suit, TableView, Tone};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const REVEAL_DELAY: Duration = Duration::from_millis(700);

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_hide_hole_card(true);
    let game = Game::new(options, seed);

    loop {
        while game.phase().is_accepting_input() {
            print_table(&game.view());
            match prompt_line("[h]it [s]tand [q]uit: ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = game.hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => play_dealer(&game),
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        let view = game.view();
        print_table(&view);
        if let Some(outcome) = view.outcome {
            println!("{}\n", colorize(outcome.message(), tone_color(outcome.tone())));
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {
                if let Err(err) = game.restart() {
                    println!("Restart error: {err}");
                    return;
                }
            }
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn play_dealer(game: &Game) {
    if let Err(err) = game.begin_stand() {
        println!("Action error: {err}");
        return;
    }

    println!("Dealer's turn...");
    loop {
        match game.dealer_step() {
            Ok(DealerStep::Drew(card)) => {
                thread::sleep(REVEAL_DELAY);
                println!("Dealer draws {}", format_card(&card));
            }
            Ok(DealerStep::Resolved(_)) => break,
            Err(err) => {
                println!("Dealer error: {err}");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    println!("\nDeck: {} cards remaining", view.cards_remaining);

    let mut dealer = format_cards(&view.dealer_cards);
    if view.hole_card_hidden {
        dealer.push_str(" ??");
    }
    println!("Dealer: {dealer} (score {})", view.dealer_score);
    println!(
        "Player: {} (score {})\n",
        format_cards(&view.player_cards),
        view.player_score
    );
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}

const fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Win => "32",
        Tone::Loss => "31",
        Tone::Neutral => "33",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
