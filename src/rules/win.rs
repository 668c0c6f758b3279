//! Win detection.

use crate::core::GameState;

/// Cards in a completed foundation.
const FULL_FOUNDATION: usize = 13;

/// True if all four foundations hold thirteen cards.
#[must_use]
pub fn is_won(state: &GameState) -> bool {
    state.foundations().iter().all(|f| f.len() == FULL_FOUNDATION)
}

/// Mark `state` won if its foundations are complete.
///
/// Returns true only on the transition into the won state; a state that
/// was already won stays won and returns false.
pub fn detect_win(state: &mut GameState) -> bool {
    if state.is_won() || !is_won(state) {
        return false;
    }
    state.mark_won();
    true
}
