pub mod human;
pub mod perfect;
pub mod random;

pub use human::HumanPlayer;
pub use perfect::PerfectPlayer;
pub use random::RandomPlayer;
