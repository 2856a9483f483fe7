//! Favorites persistence and cross-context synchronization.
//!
//! Two `FavoritesState`s sharing one `MemoryStorage` stand in for two browser
//! tabs on the same origin.

use coinboard::domain::favorites::storage::FileStorage;
use coinboard::prelude::*;

fn id(s: &str) -> CoinId {
    CoinId::from(s)
}

#[test]
fn add_add_remove_leaves_one_id() {
    let mut favorites = FavoritesState::from_storage(MemoryStorage::new());

    favorites.add(&id("bitcoin"));
    favorites.add(&id("ethereum"));
    favorites.remove(&id("bitcoin"));

    assert_eq!(favorites.favorite_ids(), vec![id("ethereum")]);
    assert!(!favorites.is_favorite(&id("bitcoin")));
}

#[test]
fn second_tab_converges_after_events() {
    let storage = MemoryStorage::new();
    let mut tab_a = FavoritesState::from_storage(storage.clone());
    let mut tab_b = FavoritesState::from_storage(storage.clone());
    let mut tab_b_events = storage.subscribe().unwrap();

    tab_a.add(&id("bitcoin"));
    tab_a.add(&id("ethereum"));
    tab_a.remove(&id("bitcoin"));
    assert!(tab_b.favorite_ids().is_empty());

    assert!(tab_b.apply_pending(&mut tab_b_events));
    assert_eq!(tab_b.favorite_ids(), tab_a.favorite_ids());

    // Changes flow the other way too.
    let mut tab_a_events = storage.subscribe().unwrap();
    tab_b.toggle(&id("ethereum"));
    assert!(tab_a.apply_pending(&mut tab_a_events));
    assert!(tab_a.favorite_ids().is_empty());
}

#[test]
fn clearing_storage_resets_every_tab() {
    let storage = MemoryStorage::new();
    let mut tab = FavoritesState::from_storage(storage.clone());
    let mut events = storage.subscribe().unwrap();
    tab.add(&id("solana"));

    storage.clear().unwrap();
    assert!(tab.apply_pending(&mut events));
    assert!(tab.favorites().is_empty());
}

#[test]
fn corrupt_blob_from_another_tab_reads_as_empty() {
    let storage = MemoryStorage::new();
    let mut tab = FavoritesState::from_storage(storage.clone());
    let mut events = storage.subscribe().unwrap();
    tab.add(&id("bitcoin"));

    storage.set_item(FAVORITES_KEY, "{oops").unwrap();
    assert!(tab.apply_pending(&mut events));
    assert!(tab.favorites().is_empty());
}

#[test]
fn file_storage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut favorites = FavoritesState::from_storage(FileStorage::new(dir.path()));
        favorites.add(&id("bitcoin"));
        favorites.add(&id("cardano"));
    }

    let reopened = FavoritesState::from_storage(FileStorage::new(dir.path()));
    assert_eq!(reopened.favorite_ids(), vec![id("bitcoin"), id("cardano")]);

    let raw = std::fs::read_to_string(dir.path().join("cryptocurrency_favorites.json")).unwrap();
    assert_eq!(raw, r#"{"bitcoin":true,"cardano":true}"#);
}
