//! Win/loss counters and the recorder interface the engine reports to.

use serde::{Deserialize, Serialize};

/// Receives the engine's stats update intents.
///
/// The engine only ever calls these two methods; storage, durability and
/// load timing belong to the implementor. Implementations must not fail
/// the caller: persistence problems are theirs to log or retry.
pub trait StatsRecorder {
    /// A new game was started.
    fn record_game_start(&mut self);

    /// The current game was won in `moves` moves.
    fn record_win(&mut self, moves: u32);
}

/// Discards every update.
impl StatsRecorder for () {
    fn record_game_start(&mut self) {}

    fn record_win(&mut self, _moves: u32) {}
}

impl<R: StatsRecorder + ?Sized> StatsRecorder for &mut R {
    fn record_game_start(&mut self) {
        (**self).record_game_start();
    }

    fn record_win(&mut self, moves: u32) {
        (**self).record_win(moves);
    }
}

/// Persistent counter record.
///
/// ```
/// use klondike_engine::stats::{Stats, StatsRecorder};
///
/// let mut stats = Stats::default();
/// stats.record_game_start();
/// stats.record_win(120);
/// stats.record_game_start();
/// stats.record_win(95);
///
/// assert_eq!(stats.best_moves, Some(95));
/// assert_eq!(stats.to_string(), "2/2 wins • Best: 95");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    /// Fewest moves in any won game. `None` until the first win.
    pub best_moves: Option<u32>,
}

impl Stats {
    /// Fraction of played games that were won, 0.0 when none were played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }
}

impl StatsRecorder for Stats {
    fn record_game_start(&mut self) {
        self.games_played += 1;
    }

    fn record_win(&mut self, moves: u32) {
        self.games_won += 1;
        self.best_moves = Some(self.best_moves.map_or(moves, |best| best.min(moves)));
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} wins", self.games_won, self.games_played)?;
        if let Some(best) = self.best_moves {
            write!(f, " • Best: {best}")?;
        }
        Ok(())
    }
}
