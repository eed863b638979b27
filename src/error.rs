//! Crate-level error type.

use crate::config::ConfigError;
use crate::crypto::KeyError;

/// Any failure that terminates a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Batch of {requested} keypairs exceeds the limit of {max}")]
    BatchTooLarge { requested: usize, max: usize },

    #[error("Batch incomplete: expected {expected} keypairs, received {received}")]
    IncompleteBatch { expected: usize, received: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
