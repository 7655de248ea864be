use rand::Rng;

use crate::pile::{PILE_COUNT, Pile};
use crate::player::Player;
use crate::state::BoardSnapshot;

/// Guesses a pile uniformly at random, right or wrong.
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn guess(&mut self) -> Pile {
        Pile::from_slot(self.rng.gen_range(0..PILE_COUNT))
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn choose_placement(&mut self, _state: &BoardSnapshot) -> Option<Pile> {
        Some(self.guess())
    }

    fn choose_reveal(&mut self, _state: &BoardSnapshot) -> Option<Pile> {
        Some(self.guess())
    }
}
