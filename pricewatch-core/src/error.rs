//! Top-level library error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::aggregate::AggregateError;
use crate::config::ConfigError;
use crate::extract::ExtractError;

/// Errors that end a pricewatch run.
#[derive(Debug, Error)]
pub enum PriceWatchError {
    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("alert history '{}' is corrupt: {source}", path.display())]
    History {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("extractor error: {0}")]
    Extract(#[from] ExtractError),

    #[error("aggregate error: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("could not determine the home directory")]
    NoHomeDir,
}

impl PriceWatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
