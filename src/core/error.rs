//! Errors raised when building a game state from explicit piles.

use derive_more::{Display, Error};

use crate::cards::Suit;

/// A set of piles that does not form a legal position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StateError {
    /// The piles hold the wrong number of cards.
    #[display("expected 52 cards across all piles, found {found}")]
    CardCount { found: usize },

    /// A `(suit, rank)` appears more than once.
    #[display("duplicate card: rank {rank} of {suit:?}")]
    DuplicateCard { suit: Suit, rank: u8 },

    /// A foundation is not an ascending same-suit run from the Ace.
    #[display("foundation {index} is not an ascending same-suit run from the Ace")]
    FoundationOrder { index: usize },
}
