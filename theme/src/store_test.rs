use super::*;
use crate::memory::{MemoryMarkers, MemoryStorage};

fn store_with(storage: &MemoryStorage, markers: &MemoryMarkers) -> ThemeStore<MemoryStorage, MemoryMarkers> {
    ThemeStore::new(storage.clone(), markers.clone(), ThemeConfig::default())
}

// =============================================================
// set_preference
// =============================================================

#[test]
fn set_preference_dark_sets_exactly_dark_marker() {
    let storage = MemoryStorage::new();
    let markers = MemoryMarkers::new();
    let mut store = store_with(&storage, &markers);

    store.set_preference(true).unwrap();

    assert_eq!(markers.classes(), vec!["forcedark".to_string()]);
    assert_eq!(storage.get("darkmode").as_deref(), Some("true"));
}

#[test]
fn set_preference_light_replaces_dark_marker() {
    let storage = MemoryStorage::new();
    let markers = MemoryMarkers::with_classes(&["forcedark"]);
    let mut store = store_with(&storage, &markers);

    store.set_preference(false).unwrap();

    assert_eq!(markers.classes(), vec!["forcelight".to_string()]);
    assert_eq!(storage.get("darkmode").as_deref(), Some("false"));
}

#[test]
fn set_preference_repairs_both_markers_present() {
    let storage = MemoryStorage::new();
    let markers = MemoryMarkers::with_classes(&["forcedark", "forcelight", "page"]);
    let mut store = store_with(&storage, &markers);

    store.set_preference(true).unwrap();

    assert!(markers.contains("forcedark"));
    assert!(!markers.contains("forcelight"));
    assert!(markers.contains("page"));
}

#[test]
fn set_preference_storage_failure_still_updates_markers() {
    let storage = MemoryStorage::new();
    storage.set_read_only(true);
    let markers = MemoryMarkers::new();
    let mut store = store_with(&storage, &markers);

    let err = store.set_preference(true).unwrap_err();

    assert!(matches!(err, ThemeError::Storage(_)));
    assert!(markers.contains("forcedark"));
    assert_eq!(storage.get("darkmode"), None);
}

// =============================================================
// get_preference / current
// =============================================================

#[test]
fn get_preference_reads_markers_not_storage() {
    let storage = MemoryStorage::with_entry("darkmode", "true");
    let markers = MemoryMarkers::with_classes(&["forcelight"]);
    let store = store_with(&storage, &markers);

    assert!(!store.get_preference().unwrap());
    assert_eq!(store.current().unwrap(), Theme::Light);
}

#[test]
fn current_is_dark_when_dark_marker_present() {
    let markers = MemoryMarkers::with_classes(&["forcedark"]);
    let store = store_with(&MemoryStorage::new(), &markers);
    assert_eq!(store.current().unwrap(), Theme::Dark);
}

// =============================================================
// stored
// =============================================================

#[test]
fn stored_treats_empty_string_as_absent() {
    let storage = MemoryStorage::with_entry("darkmode", "");
    let store = store_with(&storage, &MemoryMarkers::new());
    assert_eq!(store.stored().unwrap(), None);
}

#[test]
fn stored_returns_raw_value() {
    let storage = MemoryStorage::with_entry("darkmode", "yes");
    let store = store_with(&storage, &MemoryMarkers::new());
    assert_eq!(store.stored().unwrap().as_deref(), Some("yes"));
}

#[test]
fn custom_config_names_are_used() {
    let storage = MemoryStorage::new();
    let markers = MemoryMarkers::new();
    let config = ThemeConfig {
        storage_key: "site-theme".into(),
        dark_class: "is-dark".into(),
        light_class: "is-light".into(),
        ..ThemeConfig::default()
    };
    let mut store = ThemeStore::new(storage.clone(), markers.clone(), config);

    store.set_preference(false).unwrap();

    assert_eq!(markers.classes(), vec!["is-light".to_string()]);
    assert_eq!(storage.get("site-theme").as_deref(), Some("false"));
    assert_eq!(storage.get("darkmode"), None);
}

#[test]
fn set_preference_repeated_keeps_one_marker_and_canonical_value() {
    let storage = MemoryStorage::with_entry("darkmode", "yes");
    let markers = MemoryMarkers::new();
    let mut store = store_with(&storage, &markers);

    store.set_preference(true).unwrap();
    store.set_preference(true).unwrap();

    assert_eq!(markers.classes(), vec!["forcedark".to_string()]);
    assert_eq!(storage.get("darkmode").as_deref(), Some("true"));
    assert!(store.get_preference().unwrap());
}
