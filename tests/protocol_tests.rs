//! Selection protocol integration tests.
//!
//! These drive a `Klondike` session through the public event interface
//! and check the resulting states and stats intents.

use klondike_engine::{
    create_deck, Card, GameState, KlondikeBuilder, Outcome, Pile, PileId, Selection, Stats, Suit,
};
use rustc_hash::FxHashSet;

fn up(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).flipped_up()
}

/// Build a legal position; every card not placed goes face-down to the stock.
fn position(
    tableau: [Vec<Card>; 7],
    foundations: [Vec<Card>; 4],
    waste: Vec<Card>,
    moves: u32,
) -> GameState {
    let used: FxHashSet<_> = tableau
        .iter()
        .chain(foundations.iter())
        .chain(std::iter::once(&waste))
        .flatten()
        .map(|c| c.key())
        .collect();
    let stock: Pile = create_deck()
        .into_iter()
        .filter(|c| !used.contains(&c.key()))
        .collect();
    GameState::from_parts(
        tableau.map(Pile::from),
        foundations.map(Pile::from),
        stock,
        Pile::from(waste),
        moves,
    )
    .expect("test position should be legal")
}

// =============================================================================
// Deal
// =============================================================================

/// A fresh session deals the triangular layout.
#[test]
fn test_deal_shape() {
    let game = KlondikeBuilder::new().seed(2024).build(Stats::default());
    let state = game.state();

    for (i, pile) in state.tableau().iter().enumerate() {
        assert_eq!(pile.len(), i + 1);
        let face_up: Vec<_> = pile.iter().map(|c| c.face_up).collect();
        let mut expected = vec![false; i];
        expected.push(true);
        assert_eq!(face_up, expected);
    }
    assert_eq!(state.stock().len(), 24);
    assert!(state.stock().iter().all(|c| !c.face_up));
    assert!(state.waste().is_empty());
    assert!(state.foundations().iter().all(|f| f.is_empty()));
    assert_eq!(state.move_count(), 0);
    assert_eq!(state.selection(), None);
    assert!(!state.is_won());
}

// =============================================================================
// Moves
// =============================================================================

/// King of Spades from the waste onto empty tableau pile 6.
#[test]
fn test_king_from_waste_to_empty_pile() {
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0] = vec![up(Suit::Hearts, 5)];
    let waste = vec![up(Suit::Diamonds, 9), up(Suit::Spades, 13)];
    let state = position(tableau, Default::default(), waste, 3);

    let mut game = KlondikeBuilder::new().seed(1).resume(state, Stats::default());

    let outcome = game.click_card(PileId::waste(), 1);
    assert_eq!(outcome, Outcome::Selected(Selection::new(PileId::waste(), 1)));

    let outcome = game.click_pile(PileId::tableau(6));
    assert_eq!(
        outcome,
        Outcome::Moved {
            from: PileId::waste(),
            to: PileId::tableau(6),
            count: 1
        }
    );

    let state = game.state();
    assert_eq!(state.waste().len(), 1);
    assert_eq!(state.waste().back(), Some(&up(Suit::Diamonds, 9)));
    assert_eq!(state.move_count(), 4);
    let pile6: Vec<_> = state.tableau()[6].iter().copied().collect();
    assert_eq!(pile6, vec![up(Suit::Spades, 13)]);
    assert_eq!(state.selection(), None);
}

/// An empty tableau pile can never start a selection.
#[test]
fn test_empty_pile_click_without_selection_is_noop() {
    let mut game = KlondikeBuilder::new()
        .seed(1)
        .resume(position(Default::default(), Default::default(), vec![], 0), ());
    let before = game.snapshot();

    assert_eq!(game.click_pile(PileId::tableau(3)), Outcome::Ignored);
    assert_eq!(game.click_card(PileId::tableau(3), 0), Outcome::Ignored);
    assert_eq!(game.state(), &before);
}

/// Rejecting twice gives the same state as rejecting once.
#[test]
fn test_idempotent_rejection() {
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0] = vec![up(Suit::Clubs, 4)];
    tableau[1] = vec![up(Suit::Spades, 5)];
    let mut game = KlondikeBuilder::new()
        .seed(1)
        .resume(position(tableau, Default::default(), vec![], 0), ());

    assert!(matches!(game.click_card(PileId::tableau(0), 0), Outcome::Selected(_)));
    assert_eq!(game.click_card(PileId::tableau(1), 0), Outcome::Rejected);
    let once = game.snapshot();
    assert_eq!(once.selection(), None);

    assert!(matches!(game.click_card(PileId::tableau(0), 0), Outcome::Selected(_)));
    assert_eq!(game.click_card(PileId::tableau(1), 0), Outcome::Rejected);
    assert_eq!(game.state(), &once);
}

/// A snapshot taken before a move does not see the move.
#[test]
fn test_snapshot_isolated_from_later_events() {
    let mut game = KlondikeBuilder::new().seed(77).build(());
    let before = game.snapshot();

    game.draw_stock();
    game.draw_stock();

    assert_eq!(before.waste().len(), 0);
    assert_eq!(before.stock().len(), 24);
    assert_eq!(game.state().waste().len(), 2);
}

// =============================================================================
// Stock and waste
// =============================================================================

/// Waste [c1, c2, c3] recycles to stock [c3, c2, c1], c1 on top.
#[test]
fn test_recycle_order() {
    let c1 = up(Suit::Hearts, 2);
    let c2 = up(Suit::Clubs, 6);
    let c3 = up(Suit::Diamonds, 11);

    // Park the other 49 cards in tableau pile 0 so the stock starts empty
    let rest: Vec<Card> = create_deck()
        .into_iter()
        .filter(|c| ![c1.key(), c2.key(), c3.key()].contains(&c.key()))
        .collect();
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0] = rest;

    let state = position(tableau, Default::default(), vec![c1, c2, c3], 0);
    assert!(state.stock().is_empty());

    let mut game = KlondikeBuilder::new().seed(1).resume(state, ());
    assert_eq!(game.draw_stock(), Outcome::Recycled);

    let stock: Vec<_> = game.state().stock().iter().copied().collect();
    assert_eq!(
        stock,
        vec![c3.flipped_down(), c2.flipped_down(), c1.flipped_down()]
    );
    assert!(game.state().waste().is_empty());

    // The first card drawn in the new cycle is c1
    assert_eq!(game.draw_stock(), Outcome::Drew);
    assert_eq!(game.state().waste().back(), Some(&c1));
}

/// Drawing through the whole stock and recycling restores the stock.
#[test]
fn test_full_stock_cycle() {
    let mut game = KlondikeBuilder::new().seed(31).build(());
    let original = game.state().stock().clone();

    for _ in 0..24 {
        assert_eq!(game.draw_stock(), Outcome::Drew);
    }
    assert!(game.state().stock().is_empty());
    assert_eq!(game.state().waste().len(), 24);

    assert_eq!(game.draw_stock(), Outcome::Recycled);
    assert_eq!(game.state().stock(), &original);
    assert_eq!(game.state().move_count(), 0);
}

/// A draw clears an active selection.
#[test]
fn test_draw_cancels_selection() {
    let mut game = KlondikeBuilder::new().seed(5).build(());
    assert!(matches!(game.click_card(PileId::tableau(6), 6), Outcome::Selected(_)));

    game.draw_stock();
    assert_eq!(game.state().selection(), None);
}

// =============================================================================
// Winning
// =============================================================================

/// A completed position resumed with 120 moves is won and reports best = 120.
#[test]
fn test_win_trigger_reports_best_moves() {
    let foundations = Suit::ALL.map(|s| (1..=13).map(|r| up(s, r)).collect::<Vec<_>>());
    let state = position(Default::default(), foundations, vec![], 120);

    let mut stats = Stats::default();
    let game = KlondikeBuilder::new().seed(1).resume(state, &mut stats);
    assert!(game.state().is_won());
    drop(game);

    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.best_moves, Some(120));
}

/// Playing the last King wins once and keeps the better best score.
#[test]
fn test_last_move_wins_and_updates_stats() {
    let mut foundations = Suit::ALL.map(|s| (1..=13).map(|r| up(s, r)).collect::<Vec<_>>());
    let king = foundations[3].pop().unwrap();
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[2] = vec![king];
    let state = position(tableau, foundations, vec![], 40);

    let prior = Stats {
        games_played: 3,
        games_won: 1,
        best_moves: Some(90),
    };
    let mut game = KlondikeBuilder::new().seed(1).resume(state, prior);
    assert!(!game.state().is_won());

    game.click_card(PileId::tableau(2), 0);
    let outcome = game.click_card(PileId::foundation(3), 11);
    assert!(outcome.is_move());
    assert!(game.state().is_won());
    assert_eq!(game.state().move_count(), 41);

    // Further clicks cannot un-win
    assert_eq!(game.click_card(PileId::foundation(3), 12), Outcome::Ignored);
    assert!(game.state().is_won());

    let stats = game.into_stats();
    assert_eq!(stats.games_won, 2);
    assert_eq!(stats.best_moves, Some(41));
}

/// A worse winning score does not replace the best.
#[test]
fn test_worse_win_keeps_best() {
    let foundations = Suit::ALL.map(|s| (1..=13).map(|r| up(s, r)).collect::<Vec<_>>());
    let state = position(Default::default(), foundations, vec![], 200);

    let prior = Stats {
        games_played: 5,
        games_won: 2,
        best_moves: Some(110),
    };
    let game = KlondikeBuilder::new().resume(state, prior);
    assert_eq!(game.stats().best_moves, Some(110));
    assert_eq!(game.stats().games_won, 3);
}

/// New game after a win starts counting again.
#[test]
fn test_new_game_after_win() {
    let foundations = Suit::ALL.map(|s| (1..=13).map(|r| up(s, r)).collect::<Vec<_>>());
    let state = position(Default::default(), foundations, vec![], 99);

    let mut game = KlondikeBuilder::new().seed(8).resume(state, Stats::default());
    assert_eq!(game.new_game(), Outcome::Dealt);

    assert!(!game.state().is_won());
    assert_eq!(game.state().move_count(), 0);
    assert_eq!(game.stats().games_played, 1);
    assert_eq!(game.stats().games_won, 1);
}
