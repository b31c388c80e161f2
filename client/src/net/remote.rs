//! Live API backend over `fetch` (`gloo-net`).
//!
//! Client-side (hydrate): real HTTP calls. Server-side rendering never issues
//! requests, so there every call reports [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! The body is parsed as JSON whatever the status code; only a failed
//! request or a non-JSON body is an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use async_trait::async_trait;
use serde_json::Value;

use super::adapter::{Backend, BackendMode};
use super::error::ApiError;
use crate::config::session::normalize_api_base;

/// Marks requests as coming from the web panel rather than the bot.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "webapp";

#[derive(Clone, Debug)]
pub struct RemoteBackend {
    base: String,
}

impl RemoteBackend {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: normalize_api_base(base) }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base)
        } else {
            format!("{}/{path}", self.base)
        }
    }
}

#[async_trait(?Send)]
impl Backend for RemoteBackend {
    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable("remote API is only reachable from the browser"))
        }
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
                .json(&body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable("remote API is only reachable from the browser"))
        }
    }
}

/// URL of a schedule image: `base/file/<encoded ref>`.
///
/// Returns `None` without a usable base (mock mode), in which case the UI
/// renders a placeholder.
#[must_use]
pub fn file_url(api_base: &str, file_ref: &str) -> Option<String> {
    let base = normalize_api_base(api_base);
    if base.is_empty() {
        return None;
    }
    let mut url = url::Url::parse(&base).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push("file").push(file_ref);
    Some(url.into())
}
