//! Stats persistence errors.

use derive_more::{Display, Error, From};

/// Failure to read or write the stats record.
#[derive(Debug, Display, Error, From)]
pub enum StatsError {
    /// The record file could not be read or written.
    #[display("stats I/O error: {_0}")]
    Io(std::io::Error),

    /// The record file is not valid stats JSON.
    #[display("stats format error: {_0}")]
    Json(serde_json::Error),
}
