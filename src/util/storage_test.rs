use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_get_missing_key() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("token"), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::default();
    storage.set("token", "abc123");
    assert_eq!(storage.get("token"), Some("abc123".to_owned()));
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::default();
    storage.set("token", "first");
    storage.set("token", "second");
    assert_eq!(storage.get("token"), Some("second".to_owned()));
}

#[test]
fn memory_storage_remove_deletes_entry() {
    let storage = MemoryStorage::default();
    storage.set("user", "{}");
    storage.remove("user");
    assert_eq!(storage.get("user"), None);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::default();
    storage.remove("user");
    assert_eq!(storage.get("user"), None);
}

// =============================================================
// BrowserStorage outside a browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_degrades_without_window() {
    let storage = BrowserStorage;
    storage.set("token", "abc123");
    assert_eq!(storage.get("token"), None);
    storage.remove("token");
}
