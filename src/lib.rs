//! # klondike-engine
//!
//! Game-state engine for Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Whole-State Replacement**: Every event produces a new `GameState`
//!    that replaces the old one. Piles are `im` persistent vectors, so
//!    snapshots are O(1) and never alias later states.
//!
//! 2. **Explicit Selection Protocol**: The two-click protocol is an
//!    `Idle` / `Selected` state machine, not a nullable field.
//!
//! 3. **No Errors, Only No-Ops**: Illegal moves and out-of-range clicks
//!    resolve to `Outcome::Rejected` or `Outcome::Ignored`.
//!
//! 4. **Injected Stats**: Game starts and wins are reported to a
//!    `StatsRecorder`; the engine never owns or reads persistent stats.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, actions, game state
//! - `cards`: Cards and the deck factory
//! - `zones`: Pile addressing
//! - `rules`: Move validation, execution, win detection
//! - `stats`: Stats record and recorder interface
//! - `session`: The `Klondike` engine instance
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{KlondikeBuilder, Outcome, PileId, Stats};
//!
//! let mut game = KlondikeBuilder::new().seed(42).build(Stats::default());
//!
//! assert_eq!(game.draw_stock(), Outcome::Drew);
//! assert_eq!(game.state().waste().len(), 1);
//!
//! // Tableau pile 0 holds a single face-up card after the deal
//! assert!(matches!(game.click_card(PileId::tableau(0), 0), Outcome::Selected(_)));
//!
//! game.new_game();
//! assert_eq!(game.stats().games_played, 1);
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod stats;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, EngineConfig, GameRng, GameRngState, GameState, Outcome, Selection, SelectionState,
    StateError,
};

pub use crate::cards::{create_deck, shuffle, Card, Color, RankError, Suit};

pub use crate::zones::{Pile, PileId, PileKind};

pub use crate::rules::{can_place_on_foundation, can_place_on_tableau, Transition};

pub use crate::stats::{JsonStatsStore, Stats, StatsError, StatsRecorder};

pub use crate::session::{Klondike, KlondikeBuilder};
