//! Favorites domain: the persisted set of favorite coins.
//!
//! - [`FavoriteSet`]: the set itself, persisted as `{"<coin id>": true}`.
//! - [`storage`]: the key/value backend seam plus memory and file backends.
//! - [`store::FavoritesStore`]: read-modify-write operations over one key.
//! - [`state::FavoritesState`]: in-memory mirror kept in sync with storage events.

pub mod state;
pub mod storage;
pub mod store;
#[cfg(feature = "web-storage")]
pub mod web;

pub use state::FavoritesState;
pub use storage::{MemoryStorage, StorageBackend, StorageEvent};
pub use store::FavoritesStore;

use crate::domain::coin::Coin;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Storage key holding the favorites blob.
pub const FAVORITES_KEY: &str = "cryptocurrency_favorites";

/// Favorited coin ids, iterated in id order.
///
/// Serialized as a JSON object mapping each id to `true`. Entries mapped to
/// anything but `true` are dropped on read, and removal deletes the key, so a
/// `false` entry is never written back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<CoinId, bool>", into = "BTreeMap<CoinId, bool>")]
pub struct FavoriteSet {
    ids: BTreeSet<CoinId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &CoinId) -> bool {
        self.ids.contains(id)
    }

    /// Returns `true` if `id` was not already present.
    pub fn insert(&mut self, id: CoinId) -> bool {
        self.ids.insert(id)
    }

    /// Returns `true` if `id` was present.
    pub fn remove(&mut self, id: &CoinId) -> bool {
        self.ids.remove(id)
    }

    pub fn ids(&self) -> Vec<CoinId> {
        self.ids.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoinId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited coins from `coins`, in list order.
    pub fn filter_coins(&self, coins: &[Coin]) -> Vec<Coin> {
        coins
            .iter()
            .filter(|c| self.contains(&c.id))
            .cloned()
            .collect()
    }
}

impl From<BTreeMap<CoinId, bool>> for FavoriteSet {
    fn from(map: BTreeMap<CoinId, bool>) -> Self {
        Self {
            ids: map
                .into_iter()
                .filter_map(|(id, favorited)| favorited.then_some(id))
                .collect(),
        }
    }
}

impl From<FavoriteSet> for BTreeMap<CoinId, bool> {
    fn from(set: FavoriteSet) -> Self {
        set.ids.into_iter().map(|id| (id, true)).collect()
    }
}

impl FromIterator<CoinId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = CoinId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
