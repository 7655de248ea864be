use std::array::from_fn;
use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, RANK_COUNT};
use crate::error::EngineError;

pub const PILE_COUNT: usize = RANK_COUNT;

/// One of the thirteen clock positions, numbered 1 through 13.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pile(u8);

impl Pile {
    /// The King pile in the middle of the clock.
    pub const CENTER: Pile = Pile(13);

    pub fn new(index: u8) -> Result<Self, EngineError> {
        if (1..=PILE_COUNT as u8).contains(&index) {
            Ok(Self(index))
        } else {
            Err(EngineError::PileOutOfRange(index))
        }
    }

    /// The pile a card belongs on: its rank ordinal.
    #[inline]
    pub fn destination(card: Card) -> Self {
        Self(card.rank.ordinal())
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Pile> {
        (1..=PILE_COUNT as u8).map(Pile)
    }

    /// Pile that receives the `n`-th card of a round-robin deal.
    pub(crate) fn from_slot(n: usize) -> Self {
        Self((n % PILE_COUNT) as u8 + 1)
    }

    #[inline]
    fn slot(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Pile {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pile::new(value)
    }
}

impl From<Pile> for u8 {
    fn from(pile: Pile) -> u8 {
        pile.0
    }
}

#[derive(Clone, Debug, Default)]
struct PileSlot {
    hidden: VecDeque<Card>,
    face_up: Vec<Card>,
}

/// The thirteen piles, each a queue of face-down cards plus the stack of cards
/// placed face up on it. Only the move engine mutates it.
#[derive(Clone, Debug)]
pub struct PileStore {
    slots: [PileSlot; PILE_COUNT],
}

impl PileStore {
    pub(crate) fn empty() -> Self {
        Self {
            slots: from_fn(|_| PileSlot::default()),
        }
    }

    pub fn hidden_count(&self, pile: Pile) -> usize {
        self.slots[pile.slot()].hidden.len()
    }

    /// Top face-up card, if anything has been placed on the pile yet.
    pub fn visible_card(&self, pile: Pile) -> Option<Card> {
        self.slots[pile.slot()].face_up.last().copied()
    }

    pub fn face_up(&self, pile: Pile) -> &[Card] {
        &self.slots[pile.slot()].face_up
    }

    pub fn total_hidden(&self) -> usize {
        self.slots.iter().map(|slot| slot.hidden.len()).sum()
    }

    pub fn total_face_up(&self) -> usize {
        self.slots.iter().map(|slot| slot.face_up.len()).sum()
    }

    pub fn face_up_kings(&self) -> usize {
        self.slots
            .iter()
            .flat_map(|slot| slot.face_up.iter())
            .filter(|card| card.is_king())
            .count()
    }

    /// Every card still on the board, hidden or face up.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| slot.hidden.iter().chain(slot.face_up.iter()))
            .copied()
    }

    pub(crate) fn push_hidden(&mut self, pile: Pile, card: Card) {
        self.slots[pile.slot()].hidden.push_back(card);
    }

    /// Puts `card` face up on `pile`. Only its destination pile accepts it; a
    /// pile has no card limit, so decks with repeated ranks can stack past four.
    pub(crate) fn place(&mut self, pile: Pile, card: Card) -> Result<(), EngineError> {
        if Pile::destination(card) != pile {
            return Err(EngineError::InvalidPlacement { pile, card });
        }
        self.slots[pile.slot()].face_up.push(card);
        Ok(())
    }

    pub(crate) fn pop_hidden(&mut self, pile: Pile) -> Option<Card> {
        self.slots[pile.slot()].hidden.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn pile_rejects_out_of_range_indices() {
        assert_eq!(Pile::new(0), Err(EngineError::PileOutOfRange(0)));
        assert_eq!(Pile::new(14), Err(EngineError::PileOutOfRange(14)));
        assert_eq!(Pile::new(13).map(Pile::index), Ok(13));
        assert_eq!(Pile::all().count(), PILE_COUNT);
    }

    #[test]
    fn destination_matches_rank_ordinal() {
        let jack = Card::new(Rank::Jack, Suit::Diamonds);
        assert_eq!(Pile::destination(jack).index(), 11);
        assert_eq!(Pile::destination(Card::new(Rank::King, Suit::Spades)), Pile::CENTER);
    }

    #[test]
    fn place_only_accepts_destination_pile() -> Result<(), EngineError> {
        let mut store = PileStore::empty();
        let three = Card::new(Rank::Three, Suit::Clubs);
        let wrong = Pile::new(4)?;
        assert_eq!(
            store.place(wrong, three),
            Err(EngineError::InvalidPlacement { pile: wrong, card: three })
        );
        store.place(Pile::new(3)?, three)?;
        assert_eq!(store.visible_card(Pile::new(3)?), Some(three));
        assert_eq!(store.visible_card(wrong), None);
        Ok(())
    }

    #[test]
    fn placed_cards_stack_face_up() -> Result<(), EngineError> {
        let mut store = PileStore::empty();
        let pile = Pile::new(2)?;
        for suit in Suit::ALL {
            store.place(pile, Card::new(Rank::Two, suit))?;
        }
        assert_eq!(store.face_up(pile).len(), 4);
        assert_eq!(store.visible_card(pile), Some(Card::new(Rank::Two, Suit::Clubs)));
        assert_eq!(store.total_face_up(), 4);
        Ok(())
    }

    #[test]
    fn duplicate_cards_stack_past_four() -> Result<(), EngineError> {
        let mut store = PileStore::empty();
        let pile = Pile::new(2)?;
        for suit in Suit::ALL {
            store.place(pile, Card::new(Rank::Two, suit))?;
        }
        let repeat = Card::new(Rank::Two, Suit::Spades);
        assert_eq!(store.place(pile, repeat), Ok(()));
        assert_eq!(store.face_up(pile).len(), 5);
        assert_eq!(store.visible_card(pile), Some(repeat));
        assert_eq!(
            store.place(pile, Card::new(Rank::Three, Suit::Spades)),
            Err(EngineError::InvalidPlacement {
                pile,
                card: Card::new(Rank::Three, Suit::Spades),
            })
        );
        assert_eq!(store.face_up(pile).len(), 5);
        Ok(())
    }

    #[test]
    fn pop_hidden_takes_front_first() -> Result<(), EngineError> {
        let mut store = PileStore::empty();
        let pile = Pile::new(5)?;
        let first = Card::new(Rank::Ace, Suit::Spades);
        let second = Card::new(Rank::Nine, Suit::Hearts);
        store.push_hidden(pile, first);
        store.push_hidden(pile, second);
        assert_eq!(store.hidden_count(pile), 2);
        assert_eq!(store.pop_hidden(pile), Some(first));
        assert_eq!(store.pop_hidden(pile), Some(second));
        assert_eq!(store.pop_hidden(pile), None);
        Ok(())
    }
}
