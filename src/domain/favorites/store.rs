//! `FavoritesStore`: favorites persistence over a [`StorageBackend`].
//!
//! Every operation reads the current blob, applies its change and writes it
//! back. Reads never fail: unreadable or corrupt data is treated as an empty
//! set. Writes are fire-and-forget; a failed write is logged and the updated
//! set is still returned.

use super::storage::StorageBackend;
use super::{FavoriteSet, FAVORITES_KEY};
use crate::shared::CoinId;

#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: StorageBackend> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &'static str {
        FAVORITES_KEY
    }

    pub fn get_all(&self) -> FavoriteSet {
        let raw = match self.storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FavoriteSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, using empty set");
                return FavoriteSet::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(error = %e, "corrupt favorites data, using empty set");
                FavoriteSet::new()
            }
        }
    }

    pub fn add(&self, id: &CoinId) -> FavoriteSet {
        let mut set = self.get_all();
        set.insert(id.clone());
        self.persist(&set);
        set
    }

    /// Removing an absent id still rewrites the blob.
    pub fn remove(&self, id: &CoinId) -> FavoriteSet {
        let mut set = self.get_all();
        set.remove(id);
        self.persist(&set);
        set
    }

    pub fn is_favorite(&self, id: &CoinId) -> bool {
        self.get_all().contains(id)
    }

    /// Flip `id` and return its new state.
    pub fn toggle(&self, id: &CoinId) -> bool {
        if self.is_favorite(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(FAVORITES_KEY) {
            tracing::warn!(error = %e, "failed to clear favorites");
        }
    }

    fn persist(&self, set: &FavoriteSet) {
        let json = match serde_json::to_string(set) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize favorites");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(FAVORITES_KEY, &json) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::favorites::MemoryStorage;
    use crate::error::StorageError;

    fn store() -> FavoritesStore<MemoryStorage> {
        FavoritesStore::new(MemoryStorage::new())
    }

    fn id(s: &str) -> CoinId {
        CoinId::from(s)
    }

    /// Reads succeed, writes always fail.
    struct ReadOnly(MemoryStorage);

    impl StorageBackend for ReadOnly {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }
        fn set_item(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
        fn remove_item(&self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
    }

    #[test]
    fn test_empty_on_first_read() {
        assert!(store().get_all().is_empty());
    }

    #[test]
    fn test_add_and_remove_are_idempotent() {
        let store = store();
        for _ in 0..2 {
            store.add(&id("bitcoin"));
            assert!(store.is_favorite(&id("bitcoin")));
        }
        for _ in 0..2 {
            store.remove(&id("bitcoin"));
            assert!(!store.is_favorite(&id("bitcoin")));
        }
    }

    #[test]
    fn test_add_returns_updated_set_and_persists() {
        let store = store();
        store.add(&id("ethereum"));
        let set = store.add(&id("bitcoin"));
        assert_eq!(set.ids(), vec![id("bitcoin"), id("ethereum")]);
        assert_eq!(
            store.storage().get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"{"bitcoin":true,"ethereum":true}"#)
        );
    }

    #[test]
    fn test_remove_absent_still_persists() {
        let store = store();
        let set = store.remove(&id("ghost"));
        assert!(set.is_empty());
        assert_eq!(
            store.storage().get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let store = store();
        assert!(store.toggle(&id("solana")));
        assert!(!store.toggle(&id("solana")));
        assert!(!store.is_favorite(&id("solana")));

        store.add(&id("cardano"));
        assert!(!store.toggle(&id("cardano")));
        assert!(store.toggle(&id("cardano")));
        assert!(store.is_favorite(&id("cardano")));
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        let store = store();
        for corrupt in ["not json", "[1,2,3]", r#"{"bitcoin": "yes"}"#, "null"] {
            store.storage().set_item(FAVORITES_KEY, corrupt).unwrap();
            assert!(store.get_all().is_empty(), "{corrupt}");
        }
        // A write after corruption starts from the empty set.
        assert_eq!(store.add(&id("bitcoin")).ids(), vec![id("bitcoin")]);
    }

    #[test]
    fn test_clear_deletes_blob() {
        let store = store();
        store.add(&id("bitcoin"));
        store.clear();
        assert_eq!(store.storage().get_item(FAVORITES_KEY).unwrap(), None);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_write_failure_still_returns_updated_set() {
        let store = FavoritesStore::new(ReadOnly(MemoryStorage::new()));
        let set = store.add(&id("bitcoin"));
        assert!(set.contains(&id("bitcoin")));
        assert!(!store.is_favorite(&id("bitcoin")));
        store.clear();
    }
}
