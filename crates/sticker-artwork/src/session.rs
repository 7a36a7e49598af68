//! Session persistence of the uploaded-artwork list
//!
//! A single key holds the ordered list of uploaded artwork URLs, serialized
//! as a JSON list of strings. The list is read once when the session is
//! opened and written synchronously on every change; an empty list removes
//! the key. There is a single logical writer (the current session), so no
//! locking is involved.

use crate::error::SessionError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// The persistence key for the uploaded-artwork list
pub const SESSION_KEY: &str = "sticker-artwork-images";

/// Key/value persistence seam for session state
pub trait SessionStore: Send + Sync {
    /// Read the raw value under `key`; `None` when absent
    fn read(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write the raw value under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// File-backed session store: one JSON file per key under a directory
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir` (must already exist)
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any value exists under `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().expect("store poisoned").contains_key(key)
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.lock().expect("store poisoned").get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .lock()
            .expect("store poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.lock().expect("store poisoned").remove(key);
        Ok(())
    }
}

/// The persisted, ordered list of uploaded artwork URLs
pub struct ArtworkSession {
    store: Box<dyn SessionStore>,
    urls: Vec<String>,
}

impl ArtworkSession {
    /// Open a session, reading any previously persisted list
    ///
    /// An absent key is the normal "no prior uploads" case.
    ///
    /// # Errors
    /// [`SessionError`] when the store cannot be read or the persisted
    /// value is not a JSON list of strings.
    pub fn open(store: Box<dyn SessionStore>) -> Result<Self, SessionError> {
        let urls = match store.read(SESSION_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        Ok(Self { store, urls })
    }

    /// The current URL list, oldest first
    #[inline]
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Append URLs and persist
    pub fn extend(
        &mut self,
        urls: impl IntoIterator<Item = String>,
    ) -> Result<(), SessionError> {
        self.urls.extend(urls);
        self.persist()
    }

    /// Remove one URL and persist
    pub fn remove(&mut self, url: &str) -> Result<(), SessionError> {
        self.urls.retain(|u| u != url);
        self.persist()
    }

    fn persist(&self) -> Result<(), SessionError> {
        if self.urls.is_empty() {
            self.store.remove(SESSION_KEY)
        } else {
            let raw = serde_json::to_string(&self.urls)?;
            self.store.write(SESSION_KEY, &raw)
        }
    }
}

impl std::fmt::Debug for ArtworkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtworkSession")
            .field("urls", &self.urls)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_means_no_prior_uploads() {
        let session = ArtworkSession::open(Box::new(MemoryStore::new())).unwrap();
        assert!(session.urls().is_empty());
    }

    #[test]
    fn extend_persists_and_remove_trims() {
        let mut session = ArtworkSession::open(Box::new(MemoryStore::new())).unwrap();
        session
            .extend(["a".to_string(), "b".to_string()])
            .unwrap();
        assert_eq!(session.urls(), ["a", "b"]);

        session.remove("a").unwrap();
        assert_eq!(session.urls(), ["b"]);
    }

    #[test]
    fn emptying_the_list_removes_the_key() {
        let mut session = ArtworkSession::open(Box::new(MemoryStore::new())).unwrap();
        session.extend(["only".to_string()]).unwrap();
        session.remove("only").unwrap();
        assert!(session.urls().is_empty());
        // Reopening over the same kind of store sees nothing; key removal is
        // verified against a shared file store in the integration tests.
    }

    #[test]
    fn corrupt_value_is_an_error() {
        let store = MemoryStore::new();
        store.write(SESSION_KEY, "not json").unwrap();
        assert!(matches!(
            ArtworkSession::open(Box::new(store)),
            Err(SessionError::Serialization(_))
        ));
    }
}
