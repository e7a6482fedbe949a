//! Errors raised at the edges of the planner: input parsing, profile
//! validation, config files and exports. The calculation stages never fail.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before or after a plan is computed
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading config or writing an export failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Config file is not valid TOML, or names an unknown goal or sex
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A profile field was outside its accepted range
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Goal text did not name a known goal
    #[error("Invalid goal: {0} (expected cut, recomp or slow bulk)")]
    InvalidGoal(String),

    /// Sex text did not name a supported category
    #[error("Invalid sex: {0} (expected male or female)")]
    InvalidSex(String),

    #[error("Export encoding error: {0}")]
    ExportEncoding(String),
}
