//! Move validation.
//!
//! Pure predicates deciding whether a card may land on a pile. Both take
//! the lowest card of the moving run and the destination pile.

use crate::cards::Card;
use crate::zones::{top, Pile};

/// Can `card` (the base of a run) be placed on tableau `pile`?
///
/// An empty pile accepts only a King. Otherwise the top card must be
/// face-up, of the opposite colour, and exactly one rank higher.
#[must_use]
pub fn can_place_on_tableau(card: &Card, pile: &Pile) -> bool {
    match top(pile) {
        None => card.rank == Card::KING,
        Some(top) => {
            top.face_up && card.color() != top.color() && card.rank.checked_add(1) == Some(top.rank)
        }
    }
}

/// Can `card` be placed on foundation `pile`?
///
/// An empty foundation accepts only an Ace. Otherwise the card must match
/// the top card's suit and be exactly one rank higher.
#[must_use]
pub fn can_place_on_foundation(card: &Card, pile: &Pile) -> bool {
    match top(pile) {
        None => card.rank == Card::ACE,
        Some(top) => card.suit == top.suit && top.rank.checked_add(1) == Some(card.rank),
    }
}
