//! Inbound interaction events and their results.
//!
//! The presentation layer issues one `Action` per user interaction. Each is
//! processed to completion and resolves to exactly one `Outcome`: either an
//! accepted transition or a no-op.

use serde::{Deserialize, Serialize};

use super::state::Selection;
use crate::zones::PileId;

/// A discrete interaction event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Replace the current game with a fresh deal.
    NewGame,
    /// Click on the card at `card_index` of `pile`.
    ClickCard { pile: PileId, card_index: usize },
    /// Click on a pile as a whole (empty tableau slots, foundations).
    ClickPile(PileId),
    /// Click on the stock.
    DrawStock,
}

/// What an interaction did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A new game was dealt.
    Dealt,
    /// A run was selected; the next click attempts a move.
    Selected(Selection),
    /// A run of `count` cards moved; the move counter advanced.
    Moved { from: PileId, to: PileId, count: usize },
    /// The move attempt was illegal; only the selection was cleared.
    Rejected,
    /// The top stock card was turned onto the waste.
    Drew,
    /// The waste was turned back over into the stock.
    Recycled,
    /// Nothing happened.
    Ignored,
}

impl Outcome {
    /// True if the outcome committed a move.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Outcome::Moved { .. })
    }
}
