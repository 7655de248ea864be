use std::io::{self, BufRead, StdinLock, Write};

use crate::pile::Pile;
use crate::player::Player;
use crate::state::BoardSnapshot;

/// Interactive player that reads pile numbers from a line-based input,
/// standard input by default. End of input or `q` ends play.
pub struct HumanPlayer<R: BufRead> {
    name: String,
    input: R,
}

impl HumanPlayer<StdinLock<'static>> {
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock())
    }
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    fn prompt(&mut self, state: &BoardSnapshot, question: &str) -> Option<Pile> {
        loop {
            println!("\n{}", state.message);
            println!("{}: {question}", self.name);
            println!("Type a pile number (1-13), 'help' or 'q' to quit.");
            print!("Pile: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            match self.input.read_line(&mut input) {
                Ok(0) => {
                    println!("\nInput closed. Leaving the game.");
                    return None;
                }
                Ok(_) => {}
                Err(err) => {
                    eprintln!("failed to read input: {err}");
                    return None;
                }
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                return None;
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Each card goes to the pile matching its rank: A=1 ... 10=10, J=11, Q=12, K=13.");
                println!("After placing a card, reveal the next card from that same pile.");
                continue;
            }
            let Ok(index) = trimmed.parse::<u8>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            match Pile::new(index) {
                Ok(pile) => return Some(pile),
                Err(err) => println!("{err}"),
            }
        }
    }
}

impl Default for HumanPlayer<StdinLock<'static>> {
    fn default() -> Self {
        Self::stdin("Player")
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn choose_placement(&mut self, state: &BoardSnapshot) -> Option<Pile> {
        let card = state
            .current_card
            .map(|card| card.to_string())
            .unwrap_or_else(|| String::from("--"));
        self.prompt(state, &format!("where does {card} go?"))
    }

    fn choose_reveal(&mut self, state: &BoardSnapshot) -> Option<Pile> {
        self.prompt(state, "which pile do you reveal from?")
    }
}
