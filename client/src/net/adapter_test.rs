use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> SharedStore {
    Arc::new(MemoryStorage::new())
}

fn config(api_base: &str) -> SessionConfig {
    SessionConfig { api_base: api_base.to_owned(), ..SessionConfig::default() }
}

#[test]
fn empty_base_selects_mock() {
    assert_eq!(BackendMode::for_config(&config("")), BackendMode::Mock);
    assert_eq!(select_backend(&config(""), store()).mode(), BackendMode::Mock);
}

#[test]
fn configured_base_selects_remote() {
    assert_eq!(BackendMode::for_config(&config("https://api.example")), BackendMode::Remote);
    assert_eq!(select_backend(&config("https://api.example"), store()).mode(), BackendMode::Remote);
}

#[test]
fn mock_selection_serves_every_call_locally() {
    let backend = select_backend(&config(""), store());
    let ack = block_on(backend.post("/modes", json!({ "vacation": true, "maintenance": false }))).unwrap();
    assert_eq!(ack["ok"], true);
    let modes = block_on(backend.get("/modes")).unwrap();
    assert_eq!(modes, json!({ "vacation": true, "maintenance": false }));
    assert_eq!(block_on(backend.get("/nowhere")).unwrap(), json!({}));
}

#[test]
fn mock_data_survives_backend_reselection() {
    let shared = store();
    let first = select_backend(&config(""), shared.clone());
    block_on(first.post("/homework", json!({ "date": "2025-10-17", "text": "Essay" }))).unwrap();

    let second = select_backend(&config(""), shared);
    let hw = block_on(second.get("/homework?date=2025-10-17")).unwrap();
    assert_eq!(hw["text"], "Essay");
}

#[test]
fn split_path_decodes_query() {
    let (route, pairs) = split_path("/classes/search?q=school%201&init=a%2Bb");
    assert_eq!(route, "/classes/search");
    assert_eq!(query_value(&pairs, "q"), Some("school 1"));
    assert_eq!(query_value(&pairs, "init"), Some("a+b"));
    assert_eq!(query_value(&pairs, "missing"), None);
}

#[test]
fn split_path_without_query() {
    let (route, pairs) = split_path("/modes");
    assert_eq!(route, "/modes");
    assert!(pairs.is_empty());
}
