//! Win/loss classification of a board.

use crate::card::SUIT_COUNT;
use crate::pile::{Pile, PileStore};
use crate::state::Outcome;

/// Classifies the board without touching it.
///
/// Four face-up Kings with cards still hidden is a loss at once. Otherwise a
/// finished game (`is_over`) is a win only when every pile shows its own rank
/// and nothing is left face down.
pub fn evaluate(piles: &PileStore, is_over: bool) -> Outcome {
    if piles.face_up_kings() >= SUIT_COUNT && piles.total_hidden() > 0 {
        return Outcome::Loss;
    }
    if !is_over {
        return Outcome::Ongoing;
    }
    if is_complete(piles) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

fn is_complete(piles: &PileStore) -> bool {
    piles.total_hidden() == 0
        && Pile::all().all(|pile| {
            piles
                .visible_card(pile)
                .is_some_and(|card| card.rank.ordinal() == pile.index())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::error::EngineError;

    fn king(suit: Suit) -> Card {
        Card::new(Rank::King, suit)
    }

    #[test]
    fn fresh_board_is_ongoing() {
        let mut piles = PileStore::empty();
        piles.push_hidden(Pile::CENTER, king(Suit::Spades));
        assert_eq!(evaluate(&piles, false), Outcome::Ongoing);
        assert_eq!(evaluate(&piles, false), Outcome::Ongoing);
    }

    #[test]
    fn four_kings_with_hidden_cards_lose_mid_game() -> Result<(), EngineError> {
        let mut piles = PileStore::empty();
        piles.push_hidden(Pile::new(6)?, Card::new(Rank::Six, Suit::Hearts));
        for suit in Suit::ALL {
            piles.place(Pile::CENTER, king(suit))?;
        }
        assert_eq!(evaluate(&piles, false), Outcome::Loss);
        Ok(())
    }

    #[test]
    fn full_correct_board_wins_once_over() -> Result<(), EngineError> {
        let mut piles = PileStore::empty();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                piles.place(Pile::new(rank.ordinal())?, Card::new(rank, suit))?;
            }
        }
        assert_eq!(evaluate(&piles, false), Outcome::Ongoing);
        assert_eq!(evaluate(&piles, true), Outcome::Win);
        Ok(())
    }

    #[test]
    fn finished_with_missing_piles_is_a_loss() -> Result<(), EngineError> {
        let mut piles = PileStore::empty();
        piles.place(Pile::CENTER, king(Suit::Clubs))?;
        assert_eq!(evaluate(&piles, true), Outcome::Loss);
        Ok(())
    }
}
