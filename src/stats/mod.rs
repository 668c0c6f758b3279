//! Game statistics collaborator.
//!
//! The engine owns no stats. It is handed a `StatsRecorder` and issues two
//! intents: a game started, a game was won in N moves.
//!
//! ## Key Types
//!
//! - `StatsRecorder`: the injected interface
//! - `Stats`: games played, games won, best move count
//! - `JsonStatsStore`: `Stats` persisted to a JSON file

pub mod error;
pub mod record;
pub mod store;

pub use error::StatsError;
pub use record::{Stats, StatsRecorder};
pub use store::JsonStatsStore;
