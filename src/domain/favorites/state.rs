//! `FavoritesState`: an in-memory view over [`FavoritesStore`].
//!
//! The mirror is replaced after every local mutation and re-read whenever a
//! storage event for the favorites key arrives. Changes from other contexts
//! converge eventually; nothing here is transactional.

use super::storage::{StorageBackend, StorageEvent};
use super::store::FavoritesStore;
use super::{FavoriteSet, FAVORITES_KEY};
use crate::domain::coin::Coin;
use crate::shared::CoinId;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::{FutureExt, StreamExt};

#[derive(Debug, Clone)]
pub struct FavoritesState<S> {
    store: FavoritesStore<S>,
    favorites: FavoriteSet,
}

impl<S: StorageBackend> FavoritesState<S> {
    /// Wrap `store`, loading the current persisted set.
    pub fn new(store: FavoritesStore<S>) -> Self {
        let favorites = store.get_all();
        Self { store, favorites }
    }

    pub fn from_storage(storage: S) -> Self {
        Self::new(FavoritesStore::new(storage))
    }

    pub fn store(&self) -> &FavoritesStore<S> {
        &self.store
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Favorited ids, sorted.
    pub fn favorite_ids(&self) -> Vec<CoinId> {
        self.favorites.ids()
    }

    pub fn add(&mut self, id: &CoinId) {
        self.favorites = self.store.add(id);
    }

    pub fn remove(&mut self, id: &CoinId) {
        self.favorites = self.store.remove(id);
    }

    /// Flip `id` against persisted state and return its new state.
    pub fn toggle(&mut self, id: &CoinId) -> bool {
        let now = !self.store.is_favorite(id);
        self.favorites = if now {
            self.store.add(id)
        } else {
            self.store.remove(id)
        };
        now
    }

    /// Answered from the mirror, without touching storage.
    pub fn is_favorite(&self, id: &CoinId) -> bool {
        self.favorites.contains(id)
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.favorites = FavoriteSet::new();
    }

    /// Re-read persisted state. Returns `true` if the mirror changed.
    pub fn sync(&mut self) -> bool {
        let latest = self.store.get_all();
        if latest == self.favorites {
            return false;
        }
        tracing::debug!(count = latest.len(), "favorites changed in storage");
        self.favorites = latest;
        true
    }

    /// React to a storage change notification.
    ///
    /// Events for other keys are ignored. A `None` key means storage was
    /// cleared and always triggers a re-read. Returns `true` if the mirror changed.
    pub fn handle_storage_event(&mut self, event: &StorageEvent) -> bool {
        match event.key.as_deref() {
            Some(key) if key != FAVORITES_KEY => false,
            _ => self.sync(),
        }
    }

    /// Apply every event already queued on `events` without waiting.
    /// Returns `true` if the mirror changed.
    pub fn apply_pending(&mut self, events: &mut UnboundedReceiver<StorageEvent>) -> bool {
        let mut changed = false;
        while let Some(Some(event)) = events.next().now_or_never() {
            changed |= self.handle_storage_event(&event);
        }
        changed
    }

    /// Wait for the next event on `events` and apply it.
    /// `None` once the channel is closed.
    pub async fn next_change(&mut self, events: &mut UnboundedReceiver<StorageEvent>) -> Option<bool> {
        let event = events.next().await?;
        Some(self.handle_storage_event(&event))
    }

    /// Favorited coins from `coins`, in list order.
    pub fn filter_coins(&self, coins: &[Coin]) -> Vec<Coin> {
        self.favorites.filter_coins(coins)
    }
}
