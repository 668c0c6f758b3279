//! Pile addressing and storage.
//!
//! A pile is an ordered sequence of cards whose last element is the top
//! (front-most, clickable) card. Piles are persistent vectors so a game
//! state can be cloned and replaced wholesale in O(1).

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered cards, last element on top.
pub type Pile = im::Vector<Card>;

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// The four kinds of pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PileKind {
    Tableau,
    Foundation,
    Stock,
    Waste,
}

impl PileKind {
    /// How many piles of this kind exist.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            PileKind::Tableau => TABLEAU_PILES,
            PileKind::Foundation => FOUNDATION_PILES,
            PileKind::Stock | PileKind::Waste => 1,
        }
    }
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PileKind::Tableau => "tableau",
            PileKind::Foundation => "foundation",
            PileKind::Stock => "stock",
            PileKind::Waste => "waste",
        };
        f.write_str(name)
    }
}

/// Address of one pile: its kind and its index within that kind.
///
/// Stock and waste always use index 0. An id is not checked on
/// construction; lookups against a state return `None` when it is
/// out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId {
    pub kind: PileKind,
    pub index: usize,
}

impl PileId {
    #[must_use]
    pub const fn new(kind: PileKind, index: usize) -> Self {
        Self { kind, index }
    }

    #[must_use]
    pub const fn tableau(index: usize) -> Self {
        Self::new(PileKind::Tableau, index)
    }

    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        Self::new(PileKind::Foundation, index)
    }

    #[must_use]
    pub const fn stock() -> Self {
        Self::new(PileKind::Stock, 0)
    }

    #[must_use]
    pub const fn waste() -> Self {
        Self::new(PileKind::Waste, 0)
    }

    /// True if `index` addresses an existing pile of this kind.
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.index < self.kind.count()
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PileKind::Stock | PileKind::Waste => write!(f, "{}", self.kind),
            _ => write!(f, "{}[{}]", self.kind, self.index),
        }
    }
}

/// Top card of a pile.
#[must_use]
pub fn top(pile: &Pile) -> Option<&Card> {
    pile.back()
}
