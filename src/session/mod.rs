//! Game session: the engine instance the presentation layer talks to.
//!
//! A `Klondike` owns the single active `GameState`, turns inbound events
//! into rule transitions, and reports game starts and wins to an injected
//! `StatsRecorder`.

mod game;

pub use game::{Klondike, KlondikeBuilder};
