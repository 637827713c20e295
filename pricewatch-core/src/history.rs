//! Alert history — the dedup log of signals that already raised an alert.
//!
//! Persisted as a single JSON array. Every append reads the whole list,
//! pushes the new signal and overwrites the file. There is no locking: the
//! store assumes one run at a time against the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::PriceSignal;
use crate::error::PriceWatchError;

/// File-backed, append-only list of alerted signals.
#[derive(Debug, Clone)]
pub struct AlertHistory {
    path: PathBuf,
}

impl AlertHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every stored signal. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<PriceSignal>, PriceWatchError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PriceWatchError::io(&self.path, e)),
        };

        serde_json::from_str(&content).map_err(|source| PriceWatchError::History {
            path: self.path.clone(),
            source,
        })
    }

    /// Whether `signal` was alerted before.
    pub fn contains(&self, signal: &PriceSignal) -> Result<bool, PriceWatchError> {
        Ok(self.load()?.iter().any(|s| s == signal))
    }

    /// Append `signal` and rewrite the whole file.
    pub fn append(&self, signal: PriceSignal) -> Result<(), PriceWatchError> {
        let mut entries = self.load()?;
        entries.push(signal);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PriceWatchError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(&entries).map_err(|source| {
            PriceWatchError::History {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|e| PriceWatchError::io(&self.path, e))?;

        log::debug!(
            "alert history {} now holds {} signal(s)",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }

    /// Path to the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
