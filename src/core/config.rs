//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Session configuration.
///
/// ```
/// use klondike_engine::core::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// assert!(!config.record_initial_deal);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the session RNG. `None` seeds from OS entropy.
    /// Same seed produces the same sequence of deals.
    pub seed: Option<u64>,

    /// Count the first deal of a session (initial load) as a game played.
    /// Explicit new games are always counted.
    pub record_initial_deal: bool,
}

impl EngineConfig {
    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Count the initial deal as a game played.
    pub fn with_initial_deal_recorded(mut self, record: bool) -> Self {
        self.record_initial_deal = record;
        self
    }
}
