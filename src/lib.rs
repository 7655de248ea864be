//! Rules engine for Clock Patience (Clock Solitaire).
//!
//! Thirteen piles sit on a clock face with the Kings in the middle. The card in
//! hand always goes to the pile matching its rank, and the next card comes from
//! that same pile. The game is won when every card ends face up on its own pile.

pub mod card;
pub mod deck;
mod engine;
pub mod error;
pub mod game;
pub mod outcome;
pub mod pile;
pub mod player;
pub mod players;
pub mod state;

pub use crate::card::{Card, Rank, Suit};
pub use crate::deck::{Deck, build_shuffled_deck, riffle};
pub use crate::error::{EngineError, GameError};
pub use crate::game::{GameBuilder, GameConfig, GameSession};
pub use crate::outcome::evaluate;
pub use crate::pile::{Pile, PileStore};
pub use crate::player::Player;
pub use crate::players::{HumanPlayer, PerfectPlayer, RandomPlayer};
pub use crate::state::{
    BoardSnapshot, Mode, MoveReport, Outcome, Phase, PileView, RevealReport, Verdict,
};
