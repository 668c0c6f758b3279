//! Core engine types: RNG, configuration, actions, and game state.
//!
//! These are the building blocks shared by the rules and the session.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, Outcome};
pub use config::EngineConfig;
pub use error::StateError;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Selection, SelectionState};
