//! Mock backend: answers the API surface from a browser-local document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selected when no API base is configured, so the web app can be opened and
//! exercised with no backend at all. Requests are routed on the path part
//! before `?`; the query is decoded with `url::form_urlencoded`.
//!
//! DESIGN
//! ======
//! Handlers are synchronous and run under the store mutex; the async trait
//! methods only wrap them. Every POST that changes the document persists it
//! before returning, so a reload (or a second backend sharing the same
//! storage) sees the write.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails. Unknown GET paths answer `{}`, unknown POST paths
//! answer `{ok: true, id}`, and bad input to a known POST answers
//! `{ok: false, error}` the way the live API does.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::adapter::{Backend, BackendMode, query_value, split_path};
use super::error::ApiError;
use super::mock_store::{DEMO_HOMEWORK, MockStore};
use super::types::{Rebus, is_truthy};
use crate::util::storage::SharedStore;

/// Canned click counters reported by `/stats`.
const TOP_CLICKS: [(&str, u64); 4] = [("homework", 128), ("schedule", 74), ("rebuses", 51), ("settings", 9)];

pub struct MockBackend {
    store: SharedStore,
    data: Mutex<MockStore>,
    local_admin: bool,
}

impl MockBackend {
    /// Open the mock document in `store`, seeding it on first use.
    #[must_use]
    pub fn load(store: SharedStore, local_admin: bool) -> Self {
        let data = MockStore::load_or_seed(store.as_ref());
        Self { store, data: Mutex::new(data), local_admin }
    }

    /// Copy of the current document.
    #[must_use]
    pub fn snapshot(&self) -> MockStore {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockStore> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn handle_get(&self, path: &str) -> Value {
        let (route, query) = split_path(path);
        let data = self.lock();
        match route.trim_end_matches('/') {
            "/auth/me" => json!({ "is_admin": self.local_admin, "user_id": 0, "username": "" }),
            "/homework" => {
                let date = query_value(&query, "date").unwrap_or_default();
                let text = data.homework.get(date).map_or(DEMO_HOMEWORK, String::as_str);
                json!({ "date": date, "text": text })
            }
            "/classes" => {
                let classes: Vec<_> = data.classes.iter().map(|c| c.info()).collect();
                json!({ "classes": classes })
            }
            "/classes/search" => {
                let q = query_value(&query, "q").unwrap_or_default();
                let classes: Vec<_> = data.classes.iter().filter(|c| c.matches(q)).map(|c| c.info()).collect();
                json!({ "classes": classes })
            }
            "/rebuses" => json!({ "items": data.rebuses }),
            "/rebuses/top" => json!({ "top": data.ranked_leaderboard() }),
            "/users" => json!({ "users": data.users }),
            "/modes" => json!({ "vacation": data.modes.vacation, "maintenance": data.modes.maintenance }),
            "/stats" => json!({
                "users": data.users.len(),
                "homework": data.homework.len(),
                "rebuses": data.rebuses.len(),
                "sessions": data.sessions,
                "topClicks": TOP_CLICKS,
            }),
            other => {
                if let Some(kind) = other.strip_prefix("/schedule/") {
                    let files = data.schedule.get(kind).cloned().unwrap_or_default();
                    json!({ "kind": kind, "files": files })
                } else if let Some(id) = other.strip_prefix("/users/") {
                    let user = id.parse::<i64>().ok().and_then(|id| data.users.iter().find(|u| u.user_id == id));
                    json!({ "user": user })
                } else {
                    log::debug!("mock GET {other}: no handler");
                    json!({})
                }
            }
        }
    }

    fn handle_post(&self, path: &str, body: &Value) -> Value {
        let (route, _) = split_path(path);
        let route = route.trim_end_matches('/');
        let mut data = self.lock();
        let reply = match route {
            "/classes/join" => return join_reply(&data, body),
            "/broadcast" => {
                let scope = str_field(body, "scope").unwrap_or("all");
                return json!({ "ok": true, "accepted": true, "scope": scope });
            }
            "/homework" => {
                let Some(date) = str_field(body, "date").filter(|d| !d.is_empty()) else {
                    return rejected("date required");
                };
                let text = str_field(body, "text").unwrap_or_default();
                data.homework.insert(date.to_owned(), text.to_owned());
                accepted()
            }
            "/homework/delete" => {
                let Some(date) = str_field(body, "date") else {
                    return rejected("date required");
                };
                data.homework.remove(date);
                accepted()
            }
            "/schedule" => {
                let (Some(kind), Some(file_id)) = (str_field(body, "kind"), str_field(body, "file_id")) else {
                    return rejected("kind and file_id required");
                };
                data.schedule.entry(kind.to_owned()).or_default().push(file_id.to_owned());
                accepted()
            }
            "/schedule/clear" => {
                let Some(kind) = str_field(body, "kind") else {
                    return rejected("kind required");
                };
                data.schedule.insert(kind.to_owned(), Vec::new());
                accepted()
            }
            "/rebuses" => {
                let Ok(mut rebus) = serde_json::from_value::<Rebus>(body.clone()) else {
                    return rejected("invalid rebus");
                };
                let id = uuid::Uuid::new_v4().to_string();
                rebus.id = Some(id.clone());
                data.rebuses.insert(0, rebus);
                json!({ "ok": true, "id": id })
            }
            "/rebuses/delete" => {
                let Some(id) = id_field(body, "id") else {
                    return rejected("id required");
                };
                data.rebuses.retain(|r| r.id.as_deref() != Some(id.as_str()));
                accepted()
            }
            "/rebuses/purge" => {
                data.rebuses.clear();
                data.leaderboard.clear();
                accepted()
            }
            "/users/block" | "/users/unblock" => {
                let Some(user_id) = int_field(body, "user_id") else {
                    return rejected("user_id required");
                };
                if !data.set_muted(user_id, route == "/users/block") {
                    return rejected("user not found");
                }
                accepted()
            }
            "/modes" => {
                data.modes.vacation = body.get("vacation").is_some_and(is_truthy);
                data.modes.maintenance = body.get("maintenance").is_some_and(is_truthy);
                accepted()
            }
            other => {
                log::debug!("mock POST {other}: no handler");
                return json!({ "ok": true, "id": uuid::Uuid::new_v4().to_string() });
            }
        };
        data.persist(self.store.as_ref());
        log::debug!("mock POST {route}: store updated");
        reply
    }
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    fn mode(&self) -> BackendMode {
        BackendMode::Mock
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        Ok(self.handle_get(path))
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        Ok(self.handle_post(path, &body))
    }
}

fn join_reply(data: &MockStore, body: &Value) -> Value {
    let Some(class) = int_field(body, "class_id")
        .and_then(|id| u64::try_from(id).ok())
        .and_then(|id| data.class(id))
    else {
        return rejected("class not found");
    };
    let given = str_field(body, "join_code").unwrap_or_default().trim();
    match class.join_code.as_deref() {
        Some(code) if !code.eq_ignore_ascii_case(given) => rejected("wrong join code"),
        _ => json!({ "ok": true, "id": class.id.to_string() }),
    }
}

fn accepted() -> Value {
    json!({ "ok": true })
}

fn rejected(error: &str) -> Value {
    json!({ "ok": false, "error": error })
}

fn str_field<'a>(body: &'a Value, name: &str) -> Option<&'a str> {
    body.get(name).and_then(Value::as_str)
}

/// Integer field given as a number or a numeric string.
fn int_field(body: &Value, name: &str) -> Option<i64> {
    match body.get(name)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Id field given as a string or a number.
fn id_field(body: &Value, name: &str) -> Option<String> {
    match body.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
