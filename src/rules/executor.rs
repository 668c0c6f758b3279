//! Move execution and the two-click selection protocol.
//!
//! Every function here is a pure transition: it reads the current state and
//! returns the next one together with an `Outcome`. Nothing is mutated in
//! place, so a rejected or ignored event can never leave a torn state.
//!
//! ## Protocol
//!
//! - `Idle` + click on a selectable face-up card → `Selected`
//! - `Selected` + click on any pile → move attempt, then `Idle`
//! - Stock click → draw or recycle, then `Idle`
//!
//! A click on the selected card itself, or on its own pile, is just another
//! move attempt and is rejected by the placement rules.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::validator::{can_place_on_foundation, can_place_on_tableau};
use super::win::detect_win;
use crate::cards::Card;
use crate::core::{GameState, Outcome, Selection, SelectionState};
use crate::zones::{PileId, PileKind};

/// Cards moved together. A legal tableau run never exceeds 13 cards.
pub type Run = SmallVec<[Card; 13]>;

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The state to install in place of the old one.
    pub state: GameState,
    /// What happened.
    pub outcome: Outcome,
}

impl Transition {
    fn new(state: GameState, outcome: Outcome) -> Self {
        Self { state, outcome }
    }

    fn ignored(state: &GameState) -> Self {
        Self::new(state.clone(), Outcome::Ignored)
    }

    fn rejected(state: &GameState) -> Self {
        let mut next = state.clone();
        next.set_selection(SelectionState::Idle);
        Self::new(next, Outcome::Rejected)
    }
}

/// Handle a click on the card at `card_index` of `pile`.
///
/// Clicks on missing piles or cards and on face-down cards are ignored.
/// A click anywhere on the stock is the draw action.
#[must_use]
pub fn click_card(state: &GameState, pile: PileId, card_index: usize) -> Transition {
    if state.is_won() {
        return Transition::ignored(state);
    }
    if pile.kind == PileKind::Stock && pile.in_range() {
        return draw_stock(state);
    }

    let Some(card) = state.card(pile, card_index) else {
        trace!(%pile, card_index, "click on missing card ignored");
        return Transition::ignored(state);
    };
    if !card.face_up {
        trace!(%pile, card_index, "click on face-down card ignored");
        return Transition::ignored(state);
    }

    match state.selection_state() {
        SelectionState::Idle => select(state, pile, card_index),
        SelectionState::Selected(selection) => attempt_move(state, selection, pile),
    }
}

/// Handle a click on a pile as a whole.
///
/// With no selection this only matters for the stock. With a selection it
/// is a move attempt onto `pile`.
#[must_use]
pub fn click_pile(state: &GameState, pile: PileId) -> Transition {
    if state.is_won() || !pile.in_range() {
        return Transition::ignored(state);
    }
    if pile.kind == PileKind::Stock {
        return draw_stock(state);
    }

    match state.selection_state() {
        SelectionState::Idle => Transition::ignored(state),
        SelectionState::Selected(selection) => attempt_move(state, selection, pile),
    }
}

/// Turn the top stock card onto the waste, or recycle the waste.
///
/// Recycling reverses the waste into the stock face-down, so the card
/// discarded first is drawn first again. The selection is always cleared,
/// even when both piles are empty and the outcome is `Ignored`.
#[must_use]
pub fn draw_stock(state: &GameState) -> Transition {
    if state.is_won() {
        return Transition::ignored(state);
    }

    let mut next = state.clone();
    next.set_selection(SelectionState::Idle);
    let (stock, waste) = next.stock_and_waste_mut();

    let outcome = if let Some(card) = stock.pop_back() {
        waste.push_back(card.flipped_up());
        debug!(%card, "drew from stock");
        Outcome::Drew
    } else if waste.is_empty() {
        trace!("stock and waste both empty");
        Outcome::Ignored
    } else {
        *stock = waste.iter().rev().map(|c| c.flipped_down()).collect();
        waste.clear();
        debug!(cards = stock.len(), "recycled waste into stock");
        Outcome::Recycled
    };

    Transition::new(next, outcome)
}

/// The cards that would move for `selection`: from its card to the top.
#[must_use]
pub fn moving_run(state: &GameState, selection: Selection) -> Option<Run> {
    let pile = state.pile(selection.pile)?;
    if selection.card_index >= pile.len() {
        return None;
    }
    Some(pile.iter().skip(selection.card_index).copied().collect())
}

fn select(state: &GameState, pile: PileId, card_index: usize) -> Transition {
    let len = state.pile(pile).map_or(0, |p| p.len());
    let top_only = matches!(pile.kind, PileKind::Waste | PileKind::Foundation);
    if top_only && card_index + 1 != len {
        trace!(%pile, card_index, "only the top card of this pile is selectable");
        return Transition::ignored(state);
    }

    let selection = Selection::new(pile, card_index);
    let mut next = state.clone();
    next.set_selection(SelectionState::Selected(selection));
    debug!(%pile, card_index, "selected");
    Transition::new(next, Outcome::Selected(selection))
}

fn attempt_move(state: &GameState, selection: Selection, dest: PileId) -> Transition {
    let (Some(run), Some(dest_pile)) = (moving_run(state, selection), state.pile(dest)) else {
        return Transition::rejected(state);
    };

    let base = &run[0];
    let legal = match dest.kind {
        PileKind::Tableau => can_place_on_tableau(base, dest_pile),
        PileKind::Foundation => run.len() == 1 && can_place_on_foundation(base, dest_pile),
        PileKind::Stock | PileKind::Waste => false,
    };
    if !legal {
        trace!(from = %selection.pile, to = %dest, card = %base, "move rejected");
        return Transition::rejected(state);
    }

    commit(state, selection, dest, &run)
}

fn commit(state: &GameState, selection: Selection, dest: PileId, run: &Run) -> Transition {
    let mut next = state.clone();

    let Some(source) = next.pile_mut(selection.pile) else {
        return Transition::rejected(state);
    };
    source.truncate(selection.card_index);
    if selection.pile.kind == PileKind::Tableau {
        if let Some(top) = source.back_mut() {
            *top = top.flipped_up();
        }
    }

    let Some(target) = next.pile_mut(dest) else {
        return Transition::rejected(state);
    };
    target.extend(run.iter().copied());

    next.increment_moves();
    next.set_selection(SelectionState::Idle);

    let foundations_changed =
        dest.kind == PileKind::Foundation || selection.pile.kind == PileKind::Foundation;
    if foundations_changed {
        detect_win(&mut next);
    }

    debug!(
        from = %selection.pile,
        to = %dest,
        count = run.len(),
        moves = next.move_count(),
        "moved"
    );
    Transition::new(
        next,
        Outcome::Moved {
            from: selection.pile,
            to: dest,
            count: run.len(),
        },
    )
}
