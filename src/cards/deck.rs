//! Deck factory: the ordered 52-card deck and an unbiased shuffle.

use super::card::{Card, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build the full deck, face-down, suit-major and rank-ascending.
///
/// ```
/// use klondike_engine::cards::{create_deck, Card, Suit};
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], Card::new(Suit::Hearts, 1));
/// assert_eq!(deck[51], Card::new(Suit::Spades, 13));
/// ```
#[must_use]
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (Card::ACE..=Card::KING).map(move |rank| Card::new(suit, rank)))
        .collect()
}

/// Return a uniformly random permutation of `items`.
///
/// Fisher-Yates over a copy: for each index from the last down to 1, swap
/// it with a uniformly chosen index at or below it. The input is untouched.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut result = items.to_vec();
    for i in (1..result.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        result.swap(i, j);
    }
    result
}
