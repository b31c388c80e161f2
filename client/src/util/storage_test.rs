use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    text: String,
    count: u32,
}

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("a", "1");
    assert_eq!(store.get("a").as_deref(), Some("1"));
    store.set("a", "2");
    assert_eq!(store.get("a").as_deref(), Some("2"));
    assert_eq!(store.len(), 1);
    store.remove("a");
    assert_eq!(store.get("a"), None);
}

#[test]
fn with_entries_prepopulates() {
    let store = MemoryStorage::with_entries(&[(keys::THEME, "light"), (keys::API_BASE, "")]);
    assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));
    assert_eq!(store.get(keys::API_BASE).as_deref(), Some(""));
}

#[test]
fn json_helpers_round_trip_struct() {
    let store = MemoryStorage::new();
    save_json(&store, "draft", &Draft { text: "hi".to_owned(), count: 3 });
    let loaded: Option<Draft> = load_json(&store, "draft");
    assert_eq!(loaded, Some(Draft { text: "hi".to_owned(), count: 3 }));
}

#[test]
fn load_json_treats_garbage_as_absent() {
    let store = MemoryStorage::with_entries(&[("draft", "{not json")]);
    let loaded: Option<Draft> = load_json(&store, "draft");
    assert!(loaded.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
