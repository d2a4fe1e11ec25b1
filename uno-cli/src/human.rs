use std::io::{self, BufRead, Write};

use uno_engine::card::CardColor;
use uno_engine::hand::Hand;
use uno_engine::provider::{ColorResolver, DecisionProvider};
use uno_engine::turn::{Move, TurnView};

/// Terminal decision provider: prints the seat's options and reads choices
/// from stdin. `-1` means draw; the engine itself never sees that sentinel.
#[derive(Debug, Default)]
pub struct HumanProvider;

impl HumanProvider {
    fn read_number(&self) -> Option<i64> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            let _ = io::stdout().flush();
            line.clear();
            if stdin.lock().read_line(&mut line).ok()? == 0 {
                return None;
            }
            if let Ok(number) = line.trim().parse::<i64>() {
                return Some(number);
            }
            println!("Please enter a number.");
        }
    }
}

impl ColorResolver for HumanProvider {
    fn resolve_color(&mut self, _seat: usize, _hand: &Hand) -> CardColor {
        println!("Choose color, Blue: 1, Yellow: 2, Red: 3, Green: 4");
        loop {
            match self.read_number() {
                Some(1) => return CardColor::Blue,
                Some(2) => return CardColor::Yellow,
                Some(3) => return CardColor::Red,
                Some(4) => return CardColor::Green,
                Some(_) => println!("Choose color, Blue: 1, Yellow: 2, Red: 3, Green: 4"),
                // Stdin is gone, nothing sensible left to ask.
                None => return CardColor::Red,
            }
        }
    }
}

impl DecisionProvider for HumanProvider {
    fn select_move(&mut self, view: &TurnView<'_>) -> Move {
        println!();
        println!("Player {}, what do you want to do?", view.seat);
        match view.top_card {
            Some(card) => println!("Last played card: {card}"),
            None => println!("No card has been played yet."),
        }
        let cards = view
            .hand
            .cards()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("Your cards: {cards}");
        println!();
        println!("Available options:");

        let mut playable_indexes = Vec::new();
        let mut draw_offered = false;
        for action in &view.legal_moves {
            match action {
                Move::Play { index, .. } => {
                    if let Some(card) = view.hand.get(*index) {
                        println!("{index}. {card}");
                        playable_indexes.push(*index as i64);
                    }
                }
                Move::Draw => draw_offered = true,
            }
        }
        if draw_offered {
            let amount = if view.draw_debt == 0 { 1 } else { view.draw_debt };
            println!("-1. Draw {amount}");
        }

        loop {
            match self.read_number() {
                Some(-1) if draw_offered => return Move::Draw,
                Some(choice) if playable_indexes.contains(&choice) => {
                    return Move::play(choice as usize);
                }
                Some(_) => println!("That is not one of the options."),
                None => return Move::Draw,
            }
        }
    }
}
