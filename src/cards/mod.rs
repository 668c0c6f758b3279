//! Cards and the deck factory.
//!
//! ## Key Types
//!
//! - `Suit`, `Color`: suit and its derived colour
//! - `Card`: immutable `(suit, rank, face_up)` value
//! - `create_deck` / `shuffle`: ordered 52-card deck and Fisher-Yates shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Color, RankError, Suit};
pub use deck::{create_deck, shuffle, DECK_SIZE};
