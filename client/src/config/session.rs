//! Persisted session config.
//!
//! DESIGN
//! ======
//! One explicit value loaded at startup and saved after every mutation,
//! instead of scattered reads of browser storage. The config decides the
//! backend mode once ([`SessionConfig::uses_remote_api`]); nothing
//! re-evaluates it later in the page's life.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::{KeyValueStore, keys};
use crate::util::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Base URL of the remote API; empty selects mock mode.
    pub api_base: String,
    pub theme: Theme,
    /// Empty until the user joins a class.
    pub selected_class_id: String,
    /// Opaque Telegram `initData`, forwarded to the backend for identity.
    pub telegram_init_data: String,
    /// Local admin flag honoured by the mock backend only.
    pub local_admin: bool,
}

/// Normalize an API base: trimmed, without trailing slashes.
#[must_use]
pub fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

impl SessionConfig {
    /// Load the config from `store`.
    ///
    /// `query_api` (the page's `?api=` parameter) wins over the stored base
    /// and is written back so later loads inside the Telegram view keep it.
    /// `telegram_init` comes from the WebApp host when present and is
    /// persisted; otherwise the last stored value is reused.
    pub fn load(store: &dyn KeyValueStore, query_api: Option<&str>, telegram_init: Option<&str>) -> Self {
        if let Some(api) = query_api {
            store.set(keys::API_BASE, api);
        }
        let api_base = normalize_api_base(&store.get(keys::API_BASE).unwrap_or_default());

        let telegram_init_data = match telegram_init {
            Some(init) => {
                store.set(keys::TG_INIT, init);
                init.to_owned()
            }
            None => store.get(keys::TG_INIT).unwrap_or_default(),
        };

        let theme = store.get(keys::THEME).map(|t| Theme::parse(&t)).unwrap_or_default();
        let selected_class_id = store
            .get(keys::SELECTED_CLASS_ID)
            .map(|id| id.trim().to_owned())
            .unwrap_or_default();
        let local_admin = store
            .get(keys::IS_ADMIN)
            .is_some_and(|v| matches!(v.trim(), "1" | "true"));

        Self { api_base, theme, selected_class_id, telegram_init_data, local_admin }
    }

    /// Write every field back to `store`.
    pub fn save(&self, store: &dyn KeyValueStore) {
        store.set(keys::API_BASE, &self.api_base);
        store.set(keys::THEME, self.theme.as_str());
        store.set(keys::TG_INIT, &self.telegram_init_data);
        if self.selected_class_id.is_empty() {
            store.remove(keys::SELECTED_CLASS_ID);
        } else {
            store.set(keys::SELECTED_CLASS_ID, &self.selected_class_id);
        }
        if self.local_admin {
            store.set(keys::IS_ADMIN, "1");
        } else {
            store.remove(keys::IS_ADMIN);
        }
    }

    #[must_use]
    pub fn uses_remote_api(&self) -> bool {
        !self.api_base.is_empty()
    }

    #[must_use]
    pub fn has_selected_class(&self) -> bool {
        !self.selected_class_id.is_empty()
    }

    pub fn select_class(&mut self, class_id: &str) {
        self.selected_class_id = class_id.trim().to_owned();
    }

    /// Flip the theme and return the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Tooltip for the user badge (`API=<base>` or `API=-`).
    #[must_use]
    pub fn api_label(&self) -> String {
        if self.api_base.is_empty() {
            "API=-".to_owned()
        } else {
            format!("API={}", self.api_base)
        }
    }
}
