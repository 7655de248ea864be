//! Deck construction, riffle shuffling and the round-robin deal.

use rand::Rng;

use crate::card::{Card, DECK_SIZE, SUIT_COUNT, full_deck};
use crate::error::GameError;
use crate::pile::{PILE_COUNT, Pile, PileStore};

/// Largest distance the riffle cut may land from the middle of the deck.
pub const MAX_CUT_OFFSET: isize = 5;
/// Longest run of cards dropped from one half before switching halves.
pub const MAX_RUN: usize = 3;

/// An ordered sequence of exactly 52 cards, consumed by [`Deck::deal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 52 distinct cards in rank-major order.
    pub fn ordered() -> Self {
        Self { cards: full_deck() }
    }

    /// Accepts any 52-card sequence. Duplicates are allowed; the engine plays
    /// whatever it is dealt.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() != DECK_SIZE {
            return Err(GameError::InvalidConfiguration("a deck must hold exactly 52 cards"));
        }
        Ok(Self { cards })
    }

    /// Inverse of [`Deck::deal`]: `layout[p][n]` becomes the `n`-th card
    /// dealt to pile `p + 1`.
    pub fn from_layout(layout: [[Card; SUIT_COUNT]; PILE_COUNT]) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for round in 0..SUIT_COUNT {
            for pile in &layout {
                cards.push(pile[round]);
            }
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals card `i` to pile `(i mod 13) + 1`, keeping deal order as draw
    /// order. The first card dealt to the center pile comes back separately as
    /// the card in hand.
    pub fn deal(self) -> (PileStore, Card) {
        let mut piles = PileStore::empty();
        let first = self.cards[PILE_COUNT - 1];
        for (idx, card) in self.cards.into_iter().enumerate() {
            if idx == PILE_COUNT - 1 {
                continue;
            }
            piles.push_hidden(Pile::from_slot(idx), card);
        }
        (piles, first)
    }
}

/// Builds the full deck and shuffles it with `passes` riffle passes.
pub fn build_shuffled_deck<R: Rng + ?Sized>(rng: &mut R, passes: usize) -> Deck {
    let mut cards = full_deck();
    for _ in 0..passes {
        riffle(&mut cards, rng);
    }
    Deck { cards }
}

/// One riffle pass. The deck is cut near the middle and the halves are
/// interleaved in runs of 1 to [`MAX_RUN`] cards, left half first, until both
/// are used up.
pub fn riffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    let len = cards.len();
    if len < 2 {
        return;
    }
    let offset = rng.gen_range(-MAX_CUT_OFFSET..=MAX_CUT_OFFSET);
    let cut = (len as isize / 2 + offset).clamp(0, len as isize) as usize;
    let (left, right) = cards.split_at(cut);

    let mut merged = Vec::with_capacity(len);
    let (mut l, mut r) = (0usize, 0usize);
    let mut from_left = true;
    while l < left.len() || r < right.len() {
        let run = rng.gen_range(1..=MAX_RUN);
        if from_left {
            let end = (l + run).min(left.len());
            merged.extend_from_slice(&left[l..end]);
            l = end;
        } else {
            let end = (r + run).min(right.len());
            merged.extend_from_slice(&right[r..end]);
            r = end;
        }
        from_left = !from_left;
    }
    cards.copy_from_slice(&merged);
}
