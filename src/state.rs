use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::pile::{PILE_COUNT, Pile};

/// How the two halves of a move are driven.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The player picks the destination pile, then confirms each reveal.
    Manual,
    /// Every `advance` places the card in hand and reveals the next one.
    Automatic,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Manual => "manual",
            Mode::Automatic => "automatic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    Win,
    Loss,
}

/// Classification of the board at any point in time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win,
    Loss,
}

impl Outcome {
    pub fn verdict(self) -> Option<Verdict> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Win => Some(Verdict::Win),
            Outcome::Loss => Some(Verdict::Loss),
        }
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Win => Outcome::Win,
            Verdict::Loss => Outcome::Loss,
        }
    }
}

/// Where the session stands. The card in hand and the pending reveal live in
/// different variants, so both can never be set at once.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started, or the session was reset.
    Idle,
    /// Freshly dealt; `card` came from the center pile.
    Dealt { card: Card },
    AwaitingPlacement { card: Card },
    /// A card was just placed on `pile`; its next hidden card is due.
    AwaitingReveal { pile: Pile },
    Over(Verdict),
}

impl Phase {
    pub fn current_card(self) -> Option<Card> {
        match self {
            Phase::Dealt { card } | Phase::AwaitingPlacement { card } => Some(card),
            _ => None,
        }
    }

    pub fn pending_reveal(self) -> Option<Pile> {
        match self {
            Phase::AwaitingReveal { pile } => Some(pile),
            _ => None,
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            Phase::Over(verdict) => verdict.into(),
            _ => Outcome::Ongoing,
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, Phase::Idle | Phase::Over(_))
    }
}

/// Public view of a single pile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PileView {
    pub pile: Pile,
    pub visible: Option<Card>,
    pub face_up_count: usize,
    pub hidden_count: usize,
}

/// Read-only board state handed to presentation code after every step.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub mode: Option<Mode>,
    pub phase: Phase,
    pub piles: [PileView; PILE_COUNT],
    pub current_card: Option<Card>,
    pub pending_reveal: Option<Pile>,
    pub last_pile: Option<Pile>,
    pub outcome: Outcome,
    pub is_over: bool,
    pub message: String,
}

impl BoardSnapshot {
    pub fn pile(&self, pile: Pile) -> &PileView {
        &self.piles[usize::from(pile.index()) - 1]
    }

    pub fn hidden_total(&self) -> usize {
        self.piles.iter().map(|view| view.hidden_count).sum()
    }

    /// Cards accounted for on the board: hidden, face up and in hand.
    pub fn card_count(&self) -> usize {
        let face_up: usize = self.piles.iter().map(|view| view.face_up_count).sum();
        self.hidden_total() + face_up + usize::from(self.current_card.is_some())
    }
}

/// Result of a placement, plus the reveal when it happened in the same step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveReport {
    pub card: Card,
    pub pile: Pile,
    pub revealed: Option<Card>,
    pub outcome: Outcome,
}

/// Result of confirming a manual reveal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealReport {
    pub pile: Pile,
    pub revealed: Option<Card>,
    pub outcome: Outcome,
}
