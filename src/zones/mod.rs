//! Pile system for card locations.
//!
//! The table holds seven tableau piles, four foundations, the stock and
//! the waste.
//!
//! ## Key Types
//!
//! - `Pile`: Persistent ordered card sequence (top = last element)
//! - `PileKind`: Tableau, foundation, stock, or waste
//! - `PileId`: Kind plus index within that kind

pub mod pile;

pub use pile::{top, Pile, PileId, PileKind, FOUNDATION_PILES, TABLEAU_PILES};
