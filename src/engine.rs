//! Move engine: the placement/reveal state machine over a [`PileStore`].

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EngineError;
use crate::outcome::evaluate;
use crate::pile::{Pile, PileStore};
use crate::state::{MoveReport, Outcome, Phase, RevealReport, Verdict};

/// Board plus the phase of the move in progress.
#[derive(Clone, Debug)]
pub(crate) struct Table {
    piles: PileStore,
    phase: Phase,
    last_pile: Option<Pile>,
}

impl Table {
    pub(crate) fn idle() -> Self {
        Self {
            piles: PileStore::empty(),
            phase: Phase::Idle,
            last_pile: None,
        }
    }

    pub(crate) fn deal(deck: Deck) -> Self {
        let (piles, card) = deck.deal();
        Self {
            piles,
            phase: Phase::Dealt { card },
            last_pile: None,
        }
    }

    pub(crate) fn piles(&self) -> &PileStore {
        &self.piles
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn last_pile(&self) -> Option<Pile> {
        self.last_pile
    }

    pub(crate) fn evaluate(&self) -> Outcome {
        evaluate(&self.piles, matches!(self.phase, Phase::Over(_)))
    }

    /// Places the card in hand and reveals the next card from the same pile.
    pub(crate) fn advance(&mut self) -> Result<MoveReport, EngineError> {
        let card = self.held_card()?;
        let pile = Pile::destination(card);
        let placed = self.place(card, pile)?;
        if placed.outcome != Outcome::Ongoing {
            return Ok(placed);
        }
        let reveal = self.reveal(pile);
        Ok(MoveReport {
            revealed: reveal.revealed,
            outcome: reveal.outcome,
            ..placed
        })
    }

    /// First half of a manual move. A wrong pile changes nothing.
    pub(crate) fn submit(&mut self, chosen: Pile) -> Result<MoveReport, EngineError> {
        let card = self.held_card()?;
        let required = Pile::destination(card);
        if chosen != required {
            return Err(EngineError::WrongDestination { chosen, required });
        }
        self.place(card, required)
    }

    /// Second half of a manual move: only the pile just played may be revealed.
    pub(crate) fn confirm(&mut self, chosen: Pile) -> Result<RevealReport, EngineError> {
        let pending = match self.phase {
            Phase::AwaitingReveal { pile } => pile,
            Phase::Dealt { .. } | Phase::AwaitingPlacement { .. } => {
                return Err(EngineError::NoPendingReveal);
            }
            Phase::Idle | Phase::Over(_) => return Err(EngineError::NoCurrentCard),
        };
        if chosen != pending {
            return Err(EngineError::WrongRevealPile { chosen, pending });
        }
        Ok(self.reveal(pending))
    }

    fn held_card(&self) -> Result<Card, EngineError> {
        self.phase.current_card().ok_or(EngineError::NoCurrentCard)
    }

    fn place(&mut self, card: Card, pile: Pile) -> Result<MoveReport, EngineError> {
        self.piles.place(pile, card)?;
        self.last_pile = Some(pile);
        self.phase = Phase::AwaitingReveal { pile };
        let outcome = evaluate(&self.piles, false);
        if let Some(verdict) = outcome.verdict() {
            self.phase = Phase::Over(verdict);
        }
        debug!(%card, %pile, ?outcome, "placed card");
        Ok(MoveReport {
            card,
            pile,
            revealed: None,
            outcome,
        })
    }

    fn reveal(&mut self, pile: Pile) -> RevealReport {
        let revealed = self.piles.pop_hidden(pile);
        let outcome = match revealed {
            Some(card) => {
                self.phase = Phase::AwaitingPlacement { card };
                Outcome::Ongoing
            }
            None => {
                let outcome = evaluate(&self.piles, true);
                // An exhausted pile always ends the game.
                self.phase = Phase::Over(outcome.verdict().unwrap_or(Verdict::Loss));
                outcome
            }
        };
        debug!(%pile, revealed = ?revealed, ?outcome, "revealed card");
        RevealReport {
            pile,
            revealed,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn dealt() -> Table {
        Table::deal(Deck::ordered())
    }

    #[test]
    fn ordered_deal_starts_with_center_card_in_hand() {
        let table = dealt();
        // Rank-major order puts 4♠ thirteenth.
        assert_eq!(
            table.phase(),
            Phase::Dealt {
                card: Card::new(Rank::Four, Suit::Spades)
            }
        );
        assert_eq!(table.last_pile(), None);
    }

    #[test]
    fn wrong_submission_leaves_table_untouched() -> Result<(), EngineError> {
        let mut table = dealt();
        let before = table.phase();
        let err = table.submit(Pile::new(9)?);
        assert_eq!(
            err,
            Err(EngineError::WrongDestination {
                chosen: Pile::new(9)?,
                required: Pile::new(4)?,
            })
        );
        assert_eq!(table.phase(), before);
        assert_eq!(table.piles().total_face_up(), 0);
        Ok(())
    }

    #[test]
    fn confirm_requires_pending_reveal() -> Result<(), EngineError> {
        let mut table = dealt();
        assert_eq!(table.confirm(Pile::new(4)?), Err(EngineError::NoPendingReveal));
        table.submit(Pile::new(4)?)?;
        assert_eq!(
            table.confirm(Pile::new(5)?),
            Err(EngineError::WrongRevealPile {
                chosen: Pile::new(5)?,
                pending: Pile::new(4)?,
            })
        );
        let report = table.confirm(Pile::new(4)?)?;
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(table.phase().current_card(), report.revealed);
        Ok(())
    }

    #[test]
    fn idle_table_has_nothing_to_play() -> Result<(), EngineError> {
        let mut table = Table::idle();
        assert_eq!(table.advance(), Err(EngineError::NoCurrentCard));
        assert_eq!(table.confirm(Pile::CENTER), Err(EngineError::NoCurrentCard));
        assert_eq!(table.evaluate(), Outcome::Ongoing);
        Ok(())
    }
}
