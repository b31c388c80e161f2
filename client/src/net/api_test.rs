use std::sync::Mutex;

use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::mock::MockBackend;
use crate::net::types::BroadcastScope;
use crate::util::storage::MemoryStorage;

/// Records every request and answers with a fixed body.
struct Recorder {
    reply: Value,
    calls: Mutex<Vec<(String, String, Value)>>,
}

impl Recorder {
    fn new(reply: Value) -> Arc<Self> {
        Arc::new(Self { reply, calls: Mutex::new(Vec::new()) })
    }

    fn last(&self) -> (String, String, Value) {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait(?Send)]
impl Backend for Recorder {
    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(("GET".into(), path.into(), Value::Null));
        Ok(self.reply.clone())
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(("POST".into(), path.into(), body));
        Ok(self.reply.clone())
    }
}

struct Offline;

#[async_trait(?Send)]
impl Backend for Offline {
    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }

    async fn get(&self, _path: &str) -> Result<Value, ApiError> {
        Err(ApiError::Transport("offline".into()))
    }

    async fn post(&self, _path: &str, _body: Value) -> Result<Value, ApiError> {
        Err(ApiError::Transport("offline".into()))
    }
}

fn mock_client() -> ApiClient {
    ApiClient::new(Arc::new(MockBackend::load(Arc::new(MemoryStorage::new()), false)), "")
}

#[test]
fn with_init_encodes_token() {
    assert_eq!(with_init("/auth/me", "query_id=1&hash=a b"), "/auth/me?init=query_id%3D1%26hash%3Da+b");
    assert_eq!(with_init("/x?y=1", ""), "/x?y=1&init=");
}

#[test]
fn with_query_encodes_value() {
    assert_eq!(with_query("/classes/search", "q", "School #1"), "/classes/search?q=School+%231");
}

#[test]
fn identity_call_carries_init_token() {
    let rec = Recorder::new(json!({ "is_admin": 1, "username": "teacher" }));
    let api = ApiClient::new(rec.clone(), "tok");
    let me = block_on(api.me()).unwrap();
    assert!(me.is_admin);
    assert_eq!(me.badge(), "@teacher");
    assert_eq!(rec.last().1, "/auth/me?init=tok");
}

#[test]
fn public_reads_do_not_carry_init_token() {
    let rec = Recorder::new(json!({}));
    let api = ApiClient::new(rec.clone(), "tok");
    block_on(api.homework("2025-10-17")).unwrap();
    assert_eq!(rec.last().1, "/homework?date=2025-10-17");
    block_on(api.schedule("week")).unwrap();
    assert_eq!(rec.last().1, "/schedule/week");
    block_on(api.modes()).unwrap();
    assert_eq!(rec.last().1, "/modes");
}

#[test]
fn admin_writes_carry_init_and_typed_body() {
    let rec = Recorder::new(json!({ "ok": true }));
    let api = ApiClient::new(rec.clone(), "tok");

    block_on(api.join_class(7, " abc ")).unwrap();
    assert_eq!(rec.last(), ("POST".into(), "/classes/join?init=tok".into(), json!({ "class_id": 7, "join_code": "abc" })));

    block_on(api.add_schedule_file("today", "f1")).unwrap();
    assert_eq!(rec.last().2, json!({ "kind": "today", "file_id": "f1" }));

    block_on(api.block_user(42)).unwrap();
    assert_eq!(rec.last().1, "/users/block?init=tok");
    assert_eq!(rec.last().2, json!({ "user_id": 42 }));

    let request = Broadcast { scope: BroadcastScope::AutoHomework, text: None };
    block_on(api.broadcast(&request)).unwrap();
    assert_eq!(rec.last().2, json!({ "scope": "auto_homework" }));

    block_on(api.schedule_admin("week")).unwrap();
    assert_eq!(rec.last().1, "/schedule/week?init=tok");
}

#[test]
fn rejected_write_is_not_an_error() {
    let rec = Recorder::new(json!({ "ok": false, "error": "forbidden" }));
    let api = ApiClient::new(rec, "");
    let outcome = block_on(api.save_homework("2025-10-17", "x")).unwrap();
    assert_eq!(outcome, WriteOutcome::Rejected("forbidden".into()));
}

#[test]
fn malformed_payload_is_decode_error() {
    let rec = Recorder::new(json!({ "classes": "nope" }));
    let api = ApiClient::new(rec, "");
    assert!(matches!(block_on(api.classes()), Err(ApiError::Decode(_))));
}

#[test]
fn transport_failure_propagates() {
    let api = ApiClient::new(Arc::new(Offline), "");
    assert_eq!(block_on(api.stats()), Err(ApiError::Transport("offline".into())));
}

#[test]
fn mock_round_trip_through_typed_client() {
    let api = mock_client();
    assert_eq!(api.mode(), BackendMode::Mock);

    let outcome = block_on(api.set_modes(Modes { vacation: true, maintenance: false })).unwrap();
    assert!(outcome.is_accepted());
    assert_eq!(block_on(api.modes()).unwrap(), Modes { vacation: true, maintenance: false });

    let classes = block_on(api.search_classes("moscow")).unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].id, 1);

    let missing = block_on(api.user(4040)).unwrap();
    assert!(missing.is_none());

    let stats = block_on(api.stats()).unwrap();
    assert_eq!(stats.users, 2);
    assert!(!stats.top_clicks.is_empty());
}

#[test]
fn mock_rebus_add_returns_id() {
    let api = mock_client();
    let rebus = Rebus {
        id: None,
        kind: "text".into(),
        payload: "p".into(),
        answer: "a".into(),
        difficulty: "hard".into(),
    };
    let WriteOutcome::Accepted { id: Some(id) } = block_on(api.add_rebus(&rebus)).unwrap() else {
        panic!("expected accepted write with id");
    };
    let items = block_on(api.rebuses()).unwrap();
    assert_eq!(items[0].id.as_deref(), Some(id.as_str()));
    assert_eq!(items[0].difficulty, "hard");
}
