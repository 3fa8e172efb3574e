//! CLI card game example.
//!
//! Run with `cargo run --example cli_eights -- --seed 7`. Set `RUST_LOG=debug`
//! to see the engine's log lines.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use eights::{
    Card, DrawOutcome, Effect, Game, GameOptions, GameState, Hand, MoveError, PlayOutcome, Rank,
    Suit,
};

fn main() {
    env_logger::init();

    println!("Welcome to the card game! (type 'q' to quit)");

    let seed = seed_from_args().unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut game = loop {
        let Some(players) = prompt_number("Enter number of players (2-4): ") else {
            return;
        };
        let players = u8::try_from(players).unwrap_or(0);
        match Game::new(GameOptions::default().with_players(players), seed) {
            Ok(game) => break game,
            Err(err) => println!("{err}"),
        }
    };

    if let Err(err) = game.start() {
        println!("Setup error: {err}");
        return;
    }

    loop {
        match game.state() {
            GameState::Won { player } => {
                println!("Player {} wins!", player + 1);
                return;
            }
            GameState::Drawn => {
                println!("Draw pile is empty. Game ends in a draw.");
                return;
            }
            GameState::Setup | GameState::AwaitingMove => {}
        }

        print_table(&game);

        let Some(choice) = prompt_number("Enter card index to play (or -1 to draw a card): ")
        else {
            return;
        };

        if choice == -1 {
            match game.draw_card() {
                Ok(DrawOutcome::Played(play)) => {
                    println!("Drawn card can be played. Playing card: {}", format_card(&play.card));
                    finish_play(&mut game, &play);
                }
                Ok(DrawOutcome::Kept { card, .. }) => {
                    println!("Drew {}. It cannot be played; turn passes.", format_card(&card));
                }
                Ok(DrawOutcome::Exhausted) => {}
                Err(err) => println!("Draw error: {err}"),
            }
            continue;
        }

        let Ok(index) = usize::try_from(choice) else {
            println!("Invalid move. Please try again.");
            continue;
        };

        match game.play_card(index) {
            Ok(play) => finish_play(&mut game, &play),
            Err(MoveError::IndexOutOfRange | MoveError::InvalidMove) => {
                println!("Invalid move. Please try again.");
            }
            Err(err) => println!("Move error: {err}"),
        }
    }
}

fn finish_play(game: &mut Game, play: &PlayOutcome) {
    match play.effect {
        Some(Effect::Skip) => println!("Ace! Player {} goes again.", play.player + 1),
        Some(Effect::Reverse) => println!("King! Turn order reversed."),
        Some(Effect::DrawTwo) => println!("Queen played."),
        Some(Effect::DrawFour) => println!("Jack played."),
        None => {}
    }

    if play.winner.is_some() {
        return;
    }
    if let Err(err) = game.end_turn() {
        println!("Turn error: {err}");
    }
}

fn seed_from_args() -> Option<u64> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            return args.next().and_then(|value| value.parse().ok());
        }
    }
    None
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_number(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let player = game.current_player();
    println!("\nDraw pile: {} cards remaining", game.cards_remaining());
    println!("Current Player: Player {}", player + 1);

    if let Some(top) = game.top_card() {
        println!("Top Card: {}{}", format_card(&top), format_flags(game));
    }

    if let Some(hand) = game.hand(player) {
        println!("Your Hand: {}", format_hand(hand));
    }
}

fn format_flags(game: &Game) -> String {
    let flags = game.flags();
    let notes: Vec<String> = [
        (flags.skipped, "skip"),
        (flags.reversed, "reversed"),
        (flags.draw_two, "draw two"),
        (flags.draw_four, "draw four"),
    ]
    .into_iter()
    .filter(|(set, _)| *set)
    .map(|(_, label)| colorize(label, "33"))
    .collect();

    if notes.is_empty() {
        String::new()
    } else {
        format!(" [{}]", notes.join(", "))
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("[{index}] {}", format_card(card)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    };

    let colored_rank = if card.rank.is_effect() {
        colorize(rank, color_code)
    } else {
        rank.to_string()
    };
    format!("{colored_rank}{}", colorize(suit, color_code))
}
