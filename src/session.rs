//! Session state: the loaded API key and the set of open previews.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::fetch::{self, FetchError};
use crate::filename::derive_filename;
use crate::keys::{KeyStore, KeyStoreError};

/// Handle for one fetched paste awaiting save or discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

/// A successfully fetched paste with its suggested filename.
#[derive(Debug)]
pub struct FetchedPaste {
    /// Derived from the first meaningful content line, with `.md` appended.
    pub file_name: String,
    /// Raw body text, written verbatim on save.
    pub body: String,
}

/// The component a UI binds to: update the key, fetch pastes, resolve
/// previews.
///
/// Each preview is an independent transaction; its entry leaves the map only
/// on save or discard, so several can be pending at once without sharing any
/// data.
pub struct Session {
    keys: KeyStore,
    user_agent: String,
    base_url: String,
    next_preview: u64,
    previews: HashMap<PreviewId, FetchedPaste>,
}

impl Session {
    /// Opens a session, loading the key file once.
    ///
    /// A corrupt key file is fatal at the caller; there is no recovery short
    /// of repairing the file by hand.
    pub fn open(key_path: impl Into<PathBuf>) -> Result<Self, KeyStoreError> {
        let mut keys = KeyStore::new(key_path);
        keys.load()?;
        Ok(Self {
            keys,
            user_agent: fetch::USER_AGENT.to_string(),
            base_url: fetch::RENTRY_BASE.to_string(),
            next_preview: 0,
            previews: HashMap::new(),
        })
    }

    /// Points fetches at a different host. Integration tests aim this at a
    /// local server.
    pub fn set_base_url(&mut self, base: &str) {
        self.base_url = base.to_string();
    }

    /// Stores a new API key and returns its masked rendering.
    pub fn set_key(&mut self, raw: &str) -> Result<String, KeyStoreError> {
        self.keys.store(raw)
    }

    /// Masked rendering of the current key (empty when unset).
    pub fn masked_key(&self) -> String {
        self.keys.masked()
    }

    /// Fetches a paste and registers a preview for it.
    ///
    /// On any error nothing is registered and the session is unchanged.
    pub fn fetch(&mut self, input: &str) -> Result<PreviewId, FetchError> {
        tracing::info!("fetching {:?}", input.trim());
        let id = fetch::resolve_reference(input)?;
        let url = fetch::raw_url(&self.base_url, &id);
        let body = fetch::fetch_raw(&url, self.keys.key(), &self.user_agent)?;
        let file_name = format!("{}.md", derive_filename(&body));

        let preview = PreviewId(self.next_preview);
        self.next_preview += 1;
        self.previews.insert(preview, FetchedPaste { file_name, body });
        tracing::info!("fetch of {} succeeded, preview pending", url);
        Ok(preview)
    }

    /// The pending paste for `id`, if it has not been saved or discarded.
    pub fn preview(&self, id: PreviewId) -> Option<&FetchedPaste> {
        self.previews.get(&id)
    }

    /// Number of previews still pending.
    pub fn open_previews(&self) -> usize {
        self.previews.len()
    }

    /// Writes the full body of `id` to `dest` and returns the bytes written.
    ///
    /// The preview is removed only on success; a failed write leaves it
    /// pending so the caller can retry with another path.
    pub fn save(&mut self, id: PreviewId, dest: &Path) -> io::Result<u64> {
        let paste = self
            .previews
            .get(&id)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such preview"))?;
        std::fs::write(dest, &paste.body)?;
        let written = paste.body.len() as u64;
        tracing::info!("wrote {} bytes to {}", written, dest.display());
        self.previews.remove(&id);
        Ok(written)
    }

    /// Drops the preview for `id` without touching the filesystem.
    pub fn discard(&mut self, id: PreviewId) -> Option<FetchedPaste> {
        let dropped = self.previews.remove(&id);
        if dropped.is_some() {
            tracing::info!("preview closed without saving");
        }
        dropped
    }
}
