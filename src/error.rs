// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DupeError {
    #[error("duplicate record id '{id}' (positions {first} and {second})")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("invalid tier bounds: {0}")]
    TierBounds(String),

    #[error("invalid scoring configuration: {0}")]
    Scoring(String),

    #[error("invalid vocabulary: {0}")]
    Vocabulary(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config serialization error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, DupeError>;

// Allow `?` on std::io::Error by converting to DupeError::Io with unknown path.
impl From<std::io::Error> for DupeError {
    fn from(source: std::io::Error) -> Self {
        DupeError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
