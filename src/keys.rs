//! API key persistence: a single `api-key: <token>` line on disk.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Prefix the key file content must start with.
const KEY_PREFIX: &str = "api-key:";

/// Character used when rendering the key back to a UI.
const MASK_CHAR: char = '*';

#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// Key file exists but does not look like `api-key: <token>`. Not
    /// recoverable without repairing the file by hand.
    #[error("something invalid is in the api key file {}", .path.display())]
    Corrupt { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Owns the key file path and the in-memory copy of the API key.
///
/// The raw value is only handed out for request-header construction; anything
/// user-facing goes through [`KeyStore::masked`].
pub struct KeyStore {
    path: PathBuf,
    key: String,
}

impl KeyStore {
    /// Creates a store for `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: String::new(),
        }
    }

    /// Reads the key file. A missing or empty file means no key is set (not
    /// an error); any other content without the `api-key:` prefix is corrupt.
    pub fn load(&mut self) -> Result<&str, KeyStoreError> {
        if !self.path.exists() {
            return Ok(&self.key);
        }
        let data = fs::read_to_string(&self.path)?;
        match data.strip_prefix(KEY_PREFIX) {
            Some(rest) => {
                self.key = rest.trim().to_string();
                tracing::info!("loaded api key from {}", self.path.display());
            }
            None if data.is_empty() => {}
            None => {
                return Err(KeyStoreError::Corrupt {
                    path: self.path.clone(),
                });
            }
        }
        Ok(&self.key)
    }

    /// Stores a new key and returns its masked rendering.
    ///
    /// An input that is nothing but asterisks is a masked display value
    /// copied back in; the update is refused and the current key kept.
    pub fn store(&mut self, raw: &str) -> Result<String, KeyStoreError> {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c == MASK_CHAR) {
            tracing::warn!("refusing to set api key to placeholder asterisks");
            return Ok(self.masked());
        }
        fs::write(&self.path, format!("{} {}", KEY_PREFIX, trimmed))?;
        self.key = trimmed.to_string();
        tracing::info!("stored api key to {}", self.path.display());
        Ok(self.masked())
    }

    /// Raw key for the auth header. Empty when no key is set.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// One mask character per key character, the only rendering a UI shows.
    pub fn masked(&self) -> String {
        MASK_CHAR.to_string().repeat(self.key.chars().count())
    }
}
