#![allow(dead_code)]

use std::collections::HashSet;

use clock_patience::card::full_deck;
use clock_patience::{Card, Deck, GameSession, Pile, Rank, Suit};

/// Builds a deck whose deal puts `prefixes` at the front of the given piles.
/// Every other slot is filled with unused cards in rank-major order.
pub fn arrange(prefixes: &[(u8, Vec<Card>)]) -> Vec<Card> {
    let mut layout: [[Option<Card>; 4]; 13] = [[None; 4]; 13];
    let mut used = HashSet::new();
    for (pile, cards) in prefixes {
        assert!(cards.len() <= 4, "pile prefix exceeds four cards");
        for (slot, card) in cards.iter().enumerate() {
            layout[usize::from(*pile) - 1][slot] = Some(*card);
            used.insert(*card);
        }
    }
    let mut filler = full_deck().into_iter().filter(|card| !used.contains(card));
    let layout = layout.map(|pile| {
        pile.map(|slot| slot.or_else(|| filler.next()).expect("enough filler cards"))
    });
    Deck::from_layout(layout).cards().to_vec()
}

/// A deal that plays out to a win: the chain runs A, 2, ..., K once per suit.
pub fn presolved_deck() -> Vec<Card> {
    let mut prefixes = Vec::new();
    prefixes.push((13, Suit::ALL.map(|suit| Card::new(Rank::Ace, suit)).to_vec()));
    for pile in 1..=12u8 {
        let next = Rank::from_ordinal(pile + 1).expect("rank exists");
        prefixes.push((pile, Suit::ALL.map(|suit| Card::new(next, suit)).to_vec()));
    }
    arrange(&prefixes)
}

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

pub fn pile(index: u8) -> Pile {
    Pile::new(index).expect("pile in range")
}

/// Checks the conservation, uniqueness and destination invariants.
pub fn assert_board_invariants(session: &GameSession) {
    let state = session.snapshot();
    assert_eq!(state.card_count(), 52, "cards lost or created: {state:?}");
    let mut seen: Vec<Card> = session.piles().cards().collect();
    seen.extend(state.current_card);
    let unique: HashSet<Card> = seen.iter().copied().collect();
    assert_eq!(unique.len(), seen.len(), "duplicate card on the board");
    for pile in Pile::all() {
        for placed in session.piles().face_up(pile) {
            assert_eq!(placed.rank.ordinal(), pile.index(), "{placed} on pile {pile}");
        }
    }
}
