//! Errors for the host side of the game.
//!
//! The simulation itself cannot fail: every failure inside a run is a game
//! outcome (see [`crate::sim::CrashCause`]). Only loading tuning files and
//! input scripts can go wrong.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A tuning value would break a simulation invariant
    #[error("tuning value `{name}` = {value} is out of range (expected {expected})")]
    InvalidTuning {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },
}
