//! JSON file-backed stats record.
//!
//! Each recorder call is a read-modify-write of the file so the record on
//! disk stays authoritative. Write failures are logged and the in-memory
//! copy still advances; the engine never sees an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::StatsError;
use super::record::{Stats, StatsRecorder};

/// Stats record persisted as a small JSON document.
#[derive(Debug)]
pub struct JsonStatsStore {
    path: PathBuf,
    stats: Stats,
}

impl JsonStatsStore {
    /// Open the record at `path`. A missing file starts from zeroed stats.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StatsError> {
        let path = path.into();
        let stats = read_record(&path)?;
        Ok(Self { path, stats })
    }

    /// File backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last known stats, for display.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Re-read the record from disk.
    pub fn load(&mut self) -> Result<Stats, StatsError> {
        self.stats = read_record(&self.path)?;
        Ok(self.stats)
    }

    /// Write the in-memory record to disk.
    pub fn save(&self) -> Result<(), StatsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.stats)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved stats");
        Ok(())
    }

    fn update(&mut self, apply: impl FnOnce(&mut Stats)) {
        if let Err(err) = self.load() {
            warn!(
                path = %self.path.display(),
                error = %err,
                "could not reload stats, using cached copy"
            );
        }
        apply(&mut self.stats);
        if let Err(err) = self.save() {
            warn!(path = %self.path.display(), error = %err, "could not save stats");
        }
    }
}

impl StatsRecorder for JsonStatsStore {
    fn record_game_start(&mut self) {
        self.update(Stats::record_game_start);
    }

    fn record_win(&mut self, moves: u32) {
        self.update(|stats| stats.record_win(moves));
    }
}

fn read_record(path: &Path) -> Result<Stats, StatsError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Stats::default()),
        Err(err) => Err(err.into()),
    }
}
