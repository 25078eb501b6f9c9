/// Favorites and preferences survive restarts and never diverge from disk
mod utils;

use moviedeck_lib::modules::browse::commands::{self, SetDarkModeRequest};
use moviedeck_lib::modules::favorites::FavoriteToggle;
use moviedeck_lib::modules::storage::{FileStore, KeyValueStore, MemoryStore};
use moviedeck_lib::shared::errors::AppError;
use std::sync::Arc;
use tempfile::TempDir;
use utils::factories::{alien, fight_club, MovieFactory};
use utils::fakes::FlakyStore;
use utils::helpers::offline_store;

#[test]
fn test_toggle_twice_restores_original_collection() {
    let store = offline_store(Arc::new(MemoryStore::new()));

    assert_eq!(store.toggle_favorite(alien()).unwrap(), FavoriteToggle::Added);
    assert!(store.is_favorite(348));
    assert_eq!(store.toggle_favorite(alien()).unwrap(), FavoriteToggle::Removed);
    assert!(!store.is_favorite(348));
    assert!(store.favorites().is_empty());
}

#[test]
fn test_favorites_are_unique_by_id() {
    let store = offline_store(Arc::new(MemoryStore::new()));
    store.toggle_favorite(fight_club()).unwrap();
    store.toggle_favorite(alien()).unwrap();

    // A different snapshot of an existing id removes it rather than duplicating
    let renamed = MovieFactory::new().id(550).title("Fight Club (1999)").build();
    assert_eq!(store.toggle_favorite(renamed).unwrap(), FavoriteToggle::Removed);

    let favorites = store.favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites.ids(), vec![348]);
}

#[test]
fn test_favorites_keep_insertion_order() {
    let store = offline_store(Arc::new(MemoryStore::new()));
    store.toggle_favorite(fight_club()).unwrap();
    store.toggle_favorite(alien()).unwrap();

    assert_eq!(store.favorites().ids(), vec![550, 348]);
}

#[test]
fn test_state_survives_reload_from_memory_store() {
    let storage = Arc::new(MemoryStore::new());
    {
        let store = offline_store(storage.clone());
        store.toggle_favorite(fight_club()).unwrap();
        store.toggle_favorite(alien()).unwrap();
        store.set_dark_mode(true).unwrap();
    }

    let reloaded = offline_store(storage);

    let favorites = reloaded.favorites();
    assert_eq!(favorites.ids(), vec![550, 348]);
    assert_eq!(favorites.get(550), Some(&fight_club()));
    assert!(reloaded.dark_mode());
}

#[test]
fn test_state_survives_reload_from_disk() {
    let dir = TempDir::new().unwrap();
    {
        let storage = Arc::new(FileStore::open(dir.path()).unwrap());
        let store = offline_store(storage);
        store.toggle_favorite(alien()).unwrap();
        assert!(store.toggle_dark_mode().unwrap());
    }

    let storage = Arc::new(FileStore::open(dir.path()).unwrap());
    let raw = storage.get("favorites").unwrap().unwrap();
    assert!(raw.starts_with('['));
    assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("true"));

    let reloaded = offline_store(storage);
    assert!(reloaded.is_favorite(348));
    assert_eq!(reloaded.favorites().get(348).map(|m| m.title.as_str()), Some("Alien"));
    assert!(reloaded.dark_mode());
}

#[test]
fn test_corrupt_values_fall_back_to_defaults() {
    let storage = Arc::new(MemoryStore::new());
    storage.set("favorites", "{not json").unwrap();
    storage.set("darkMode", "maybe").unwrap();

    let store = offline_store(storage);

    assert!(store.favorites().is_empty());
    assert!(!store.dark_mode());
}

#[test]
fn test_failed_favorite_write_rolls_back() {
    let storage = Arc::new(FlakyStore::new());
    let store = offline_store(storage.clone());
    store.toggle_favorite(fight_club()).unwrap();

    storage.fail_writes(true);
    let result = store.toggle_favorite(alien());

    assert!(matches!(result, Err(AppError::StorageError(_))));
    assert!(!store.is_favorite(348));
    assert_eq!(store.favorites().ids(), vec![550]);

    // Removal is rolled back the same way
    assert!(store.toggle_favorite(fight_club()).is_err());
    assert!(store.is_favorite(550));
}

#[test]
fn test_failed_dark_mode_write_rolls_back() {
    let storage = Arc::new(FlakyStore::new());
    let store = offline_store(storage.clone());

    storage.fail_writes(true);

    assert!(store.toggle_dark_mode().is_err());
    assert!(!store.dark_mode());

    storage.fail_writes(false);
    let reloaded = offline_store(storage);
    assert!(!reloaded.dark_mode());
}

#[test]
fn test_favorite_commands_report_membership() {
    let store = offline_store(Arc::new(MemoryStore::new()));

    let added = commands::toggle_favorite(alien(), &store).unwrap();
    assert!(added.is_favorite);
    assert_eq!(added.toggle, FavoriteToggle::Added);
    assert_eq!(added.total, 1);

    let removed = commands::toggle_favorite(alien(), &store).unwrap();
    assert!(!removed.is_favorite);
    assert_eq!(removed.total, 0);
    assert!(commands::get_favorites(&store).is_empty());
}

#[test]
fn test_dark_mode_commands() {
    let store = offline_store(Arc::new(MemoryStore::new()));

    assert!(commands::set_dark_mode(SetDarkModeRequest { enabled: true }, &store).unwrap());
    assert!(!commands::toggle_dark_mode(&store).unwrap());
    assert!(!commands::get_state(&store).preferences.dark_mode);
}

#[test]
fn test_failed_write_surfaces_as_command_error() {
    let storage = Arc::new(FlakyStore::new());
    storage.fail_writes(true);
    let store = offline_store(storage);

    let error = commands::toggle_favorite(alien(), &store).unwrap_err();

    assert!(error.contains("Storage error"));
    assert!(commands::get_favorites(&store).is_empty());
}
