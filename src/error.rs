// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Conditions that abort a whole run. Anything recoverable (an unreadable
/// document, a malformed row, a token that isn't a number) is handled where it
/// happens and never ends up here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("cannot enumerate input directory {}: {reason}", path.display())]
    InputDir { path: PathBuf, reason: String },

    #[error("table error: {0}")]
    Csv(#[from] csv::Error),

    #[error("table {} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("invalid config {}: {source}", path.display())]
    Config { path: PathBuf, source: toml::de::Error },
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
