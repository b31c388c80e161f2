//! Thin wrappers over browser globals: location query, Telegram WebApp
//! bridge, and blocking `alert`/`confirm` dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only these helpers touch `window` directly so the rest of the crate stays
//! testable natively. Outside the browser they return empty values and the
//! dialogs only log.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Value of query parameter `name` in a `location.search` string
/// (with or without the leading `?`). Empty values read as absent.
#[must_use]
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// The page's `location.search`.
#[must_use]
pub fn location_search() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Signal readiness to the Telegram WebApp host and return its `initData`.
///
/// Returns `None` when the page is not running inside Telegram.
#[must_use]
pub fn telegram_init_data() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let telegram = js_sys::Reflect::get(&window, &"Telegram".into()).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let webapp = js_sys::Reflect::get(&telegram, &"WebApp".into()).ok()?;
        if webapp.is_undefined() || webapp.is_null() {
            return None;
        }
        if let Some(ready) = js_sys::Reflect::get(&webapp, &"ready".into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        {
            if let Err(e) = ready.call0(&webapp) {
                log::warn!("Telegram.WebApp.ready failed: {e:?}");
            }
        }
        let init = js_sys::Reflect::get(&webapp, &"initData".into()).ok()?;
        Some(init.as_string().unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    log::info!("alert: {message}");
}

/// Ask for confirmation. Outside the browser nothing is confirmed.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    log::info!("confirm (declined): {message}");
    false
}
