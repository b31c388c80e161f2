//! The backend seam: one `get`/`post` contract over either the live API or
//! the local mock store.
//!
//! DESIGN
//! ======
//! [`select_backend`] runs once at startup and returns a strategy object;
//! callers hold `Arc<dyn Backend>` and never ask which mode they are in to
//! decide how to issue a request. Responses are untyped JSON here; the typed
//! layer lives in `net::api`.

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::mock::MockBackend;
use super::remote::RemoteBackend;
use crate::config::SessionConfig;
use crate::util::storage::SharedStore;

/// Which backing store answers requests for this page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendMode {
    Remote,
    Mock,
}

impl BackendMode {
    #[must_use]
    pub fn for_config(config: &SessionConfig) -> Self {
        if config.uses_remote_api() { Self::Remote } else { Self::Mock }
    }
}

/// Uniform request contract.
///
/// `path` is everything after the API base, query string included
/// (`/homework?date=2025-10-17`). The response body is returned whatever the
/// HTTP status; callers inspect `ok`/`error` fields themselves.
#[async_trait(?Send)]
pub trait Backend: Send + Sync {
    fn mode(&self) -> BackendMode;

    async fn get(&self, path: &str) -> Result<Value, ApiError>;

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// Build the backend for this page load from the session config.
pub fn select_backend(config: &SessionConfig, store: SharedStore) -> Arc<dyn Backend> {
    match BackendMode::for_config(config) {
        BackendMode::Remote => {
            log::info!("using remote API at {}", config.api_base);
            Arc::new(RemoteBackend::new(&config.api_base))
        }
        BackendMode::Mock => {
            log::info!("no API base configured; using local mock data");
            Arc::new(MockBackend::load(store, config.local_admin))
        }
    }
}

/// Split a request path into its route and decoded query pairs.
#[must_use]
pub fn split_path(path: &str) -> (&str, Vec<(String, String)>) {
    match path.split_once('?') {
        Some((route, query)) => {
            let pairs = url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            (route, pairs)
        }
        None => (path, Vec::new()),
    }
}

/// Look up a query value by name.
#[must_use]
pub fn query_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}
