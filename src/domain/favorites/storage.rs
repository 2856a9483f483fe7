//! Key/value storage backends for persisted favorites.
//!
//! [`StorageBackend`] is the seam: `FavoritesStore` only ever talks to it.
//! Backends here:
//! - [`MemoryStorage`]: process-local, shareable, with change notifications.
//! - [`FileStorage`]: one file per key (native only).
//! - `WebStorage`: browser `localStorage` (`web-storage` feature).

use crate::error::StorageError;
use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous string key/value storage, shaped after the browser `Storage` API.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// A change to storage made by some other context.
///
/// `key == None` means the whole storage was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: Option<String>,
    pub new_value: Option<String>,
}

// ─── MemoryStorage ───────────────────────────────────────────────────────────

#[derive(Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    subscribers: Vec<UnboundedSender<StorageEvent>>,
}

/// In-memory storage. Clones share the same items and subscribers, which
/// makes two clones behave like two browser tabs on one origin.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

impl std::fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStorage").finish_non_exhaustive()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every subsequent change. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Result<UnboundedReceiver<StorageEvent>, StorageError> {
        let (tx, rx) = mpsc::unbounded();
        self.lock()?.subscribers.push(tx);
        Ok(rx)
    }

    /// Remove every item and notify subscribers with a `None` key.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        inner.items.clear();
        Self::notify(
            &mut inner,
            StorageEvent {
                key: None,
                new_value: None,
            },
        );
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }

    fn notify(inner: &mut MemoryInner, event: StorageEvent) {
        inner
            .subscribers
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        inner.items.insert(key.to_string(), value.to_string());
        Self::notify(
            &mut inner,
            StorageEvent {
                key: Some(key.to_string()),
                new_value: Some(value.to_string()),
            },
        );
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        if inner.items.remove(key).is_some() {
            Self::notify(
                &mut inner,
                StorageEvent {
                    key: Some(key.to_string()),
                    new_value: None,
                },
            );
        }
        Ok(())
    }
}

// ─── FileStorage ─────────────────────────────────────────────────────────────

/// One JSON file per key under a directory. Writes go through a temp file
/// and a rename, so readers never see a half-written blob.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<local data dir>/coinboard`, if the platform has one.
    pub fn default_location() -> Option<Self> {
        dirs::data_local_dir().map(|p| Self::new(p.join("coinboard")))
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<std::path::PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Unavailable(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
