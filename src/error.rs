use thiserror::Error;

use crate::card::Card;
use crate::pile::Pile;
use crate::state::Mode;

/// Errors raised while building or configuring a session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Rejections of a single move. None of them mutates the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no card in hand to play")]
    NoCurrentCard,
    #[error("pile {chosen} is wrong, the card must go to pile {required}")]
    WrongDestination { chosen: Pile, required: Pile },
    #[error("pile {chosen} is wrong, reveal the next card from pile {pending}")]
    WrongRevealPile { chosen: Pile, pending: Pile },
    #[error("no reveal is pending")]
    NoPendingReveal,
    #[error(
        "operation requires {expected} mode, session is {}",
        .actual.map_or("idle", Mode::label)
    )]
    InvalidMode {
        expected: Mode,
        actual: Option<Mode>,
    },
    #[error("card {card} cannot be placed on pile {pile}")]
    InvalidPlacement { pile: Pile, card: Card },
    #[error("pile index {0} is out of range (1-13)")]
    PileOutOfRange(u8),
}

impl EngineError {
    /// True for rejections a player can recover from by choosing again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            EngineError::WrongDestination { .. } | EngineError::WrongRevealPile { .. }
        )
    }
}
