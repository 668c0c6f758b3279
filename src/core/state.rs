//! Game state: every pile, the selection, and the move counter.
//!
//! ## GameState
//!
//! The single source of truth for one game:
//! - Seven tableau piles, four foundations, stock and waste
//! - The selection state machine (`Idle` / `Selected`)
//! - Move counter and the one-way `won` flag
//!
//! Uses `im` persistent vectors, so cloning a state is O(1) and a
//! snapshot handed out never aliases a later state. Transitions build a
//! new `GameState` and the session replaces the old one wholesale.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::rng::GameRng;
use crate::cards::{create_deck, shuffle, Card, DECK_SIZE};
use crate::zones::{Pile, PileId, PileKind, FOUNDATION_PILES, TABLEAU_PILES};

/// Pointer to the lowest card of a candidate run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Source pile.
    pub pile: PileId,
    /// Index of the lowest card of the run within the source pile.
    pub card_index: usize,
}

impl Selection {
    #[must_use]
    pub const fn new(pile: PileId, card_index: usize) -> Self {
        Self { pile, card_index }
    }
}

/// Two-phase click protocol state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// No card selected; the next click selects.
    #[default]
    Idle,
    /// A run is selected; the next click is a move attempt.
    Selected(Selection),
}

impl SelectionState {
    /// The active selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selected(sel) => Some(*sel),
        }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }
}

/// Complete state of one game.
///
/// Deserializing goes through [`GameState::from_parts`], so a stored
/// position is validated like any explicit one. The selection and the
/// `won` flag are not read back; resuming re-runs the win detector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    tableau: [Pile; TABLEAU_PILES],
    foundations: [Pile; FOUNDATION_PILES],
    stock: Pile,
    waste: Pile,
    selection: SelectionState,
    move_count: u32,
    won: bool,
}

/// Wire form of a `GameState`: the piles and the move counter.
#[derive(Deserialize)]
struct GameStateRecord {
    tableau: [Pile; TABLEAU_PILES],
    foundations: [Pile; FOUNDATION_PILES],
    stock: Pile,
    waste: Pile,
    move_count: u32,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = StateError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        Self::from_parts(
            record.tableau,
            record.foundations,
            record.stock,
            record.waste,
            record.move_count,
        )
    }
}

impl GameState {
    /// Shuffle a fresh deck and deal a new game.
    ///
    /// Triangular deal: tableau pile `i` receives `i + 1` cards, consumed
    /// in increasing pile order; only the last card dealt to each pile is
    /// face-up. The remaining 24 cards become the face-down stock.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let deck = shuffle(&create_deck(), rng);
        let mut cards = deck.into_iter();

        let tableau: [Pile; TABLEAU_PILES] = std::array::from_fn(|i| {
            cards
                .by_ref()
                .take(i + 1)
                .enumerate()
                .map(|(j, c)| if j == i { c.flipped_up() } else { c.flipped_down() })
                .collect()
        });
        let stock: Pile = cards.map(Card::flipped_down).collect();

        Self {
            tableau,
            foundations: Default::default(),
            stock,
            waste: Pile::new(),
            selection: SelectionState::Idle,
            move_count: 0,
            won: false,
        }
    }

    /// Build a position from explicit piles.
    ///
    /// Checks that the piles hold each of the 52 cards exactly once and
    /// that every foundation is an ascending same-suit run from the Ace.
    /// Tableau facing is taken as given. The result has no selection and
    /// is not yet marked won; run the win detector to evaluate it.
    pub fn from_parts(
        tableau: [Pile; TABLEAU_PILES],
        foundations: [Pile; FOUNDATION_PILES],
        stock: Pile,
        waste: Pile,
        move_count: u32,
    ) -> Result<Self, StateError> {
        let state = Self {
            tableau,
            foundations,
            stock,
            waste,
            selection: SelectionState::Idle,
            move_count,
            won: false,
        };

        let found = state.card_count();
        if found != DECK_SIZE {
            return Err(StateError::CardCount { found });
        }

        let mut seen = FxHashSet::default();
        for card in state.all_cards() {
            if !seen.insert(card.key()) {
                return Err(StateError::DuplicateCard {
                    suit: card.suit,
                    rank: card.rank,
                });
            }
        }

        if let Some(index) = state.foundations.iter().position(|f| !is_foundation_run(f)) {
            return Err(StateError::FoundationOrder { index });
        }

        Ok(state)
    }

    // === Piles ===

    #[must_use]
    pub fn tableau(&self) -> &[Pile; TABLEAU_PILES] {
        &self.tableau
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATION_PILES] {
        &self.foundations
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Look up a pile by id. `None` if the index is out of range.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id.kind {
            PileKind::Tableau => self.tableau.get(id.index),
            PileKind::Foundation => self.foundations.get(id.index),
            PileKind::Stock => (id.index == 0).then_some(&self.stock),
            PileKind::Waste => (id.index == 0).then_some(&self.waste),
        }
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id.kind {
            PileKind::Tableau => self.tableau.get_mut(id.index),
            PileKind::Foundation => self.foundations.get_mut(id.index),
            PileKind::Stock => (id.index == 0).then_some(&mut self.stock),
            PileKind::Waste => (id.index == 0).then_some(&mut self.waste),
        }
    }

    pub(crate) fn stock_and_waste_mut(&mut self) -> (&mut Pile, &mut Pile) {
        (&mut self.stock, &mut self.waste)
    }

    /// Look up a single card. `None` if the pile or index is out of range.
    #[must_use]
    pub fn card(&self, id: PileId, card_index: usize) -> Option<&Card> {
        self.pile(id)?.get(card_index)
    }

    /// Iterate over every card on the table, pile by pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain(std::iter::once(&self.stock))
            .chain(std::iter::once(&self.waste))
            .flat_map(|pile| pile.iter())
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    /// True if the table holds each of the 52 cards exactly once.
    #[must_use]
    pub fn is_card_set_complete(&self) -> bool {
        let unique: FxHashSet<_> = self.all_cards().map(|c| c.key()).collect();
        self.card_count() == DECK_SIZE && unique.len() == DECK_SIZE
    }

    /// True if every foundation is an ascending same-suit run from the Ace.
    #[must_use]
    pub fn foundations_ordered(&self) -> bool {
        self.foundations.iter().all(is_foundation_run)
    }

    // === Selection ===

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection.selection()
    }

    pub(crate) fn set_selection(&mut self, selection: SelectionState) {
        self.selection = selection;
    }

    // === Progress ===

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn increment_moves(&mut self) {
        self.move_count += 1;
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    pub(crate) fn mark_won(&mut self) {
        self.won = true;
    }
}

fn is_foundation_run(pile: &Pile) -> bool {
    let Some(base) = pile.front() else {
        return true;
    };
    pile.iter()
        .enumerate()
        .all(|(i, c)| c.suit == base.suit && c.rank as usize == i + 1 && c.face_up)
}
