//! The single-page web app: session bootstrap, panels, and class modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here depends on browser state (`localStorage`, the Telegram
//! WebApp object, the page query string). Server rendering emits only the
//! loading fallback; the real tree is built after the client mounts, so the
//! hydrated markup always matches what the server sent.
//!
//! DESIGN
//! ======
//! Bootstrap order: load the session config, apply the theme, pick the
//! backend once, then provide contexts and fire the two startup requests
//! (identity and modes). Panels stay mounted and are shown or hidden by the
//! navigation state so their inputs survive tab switches.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppServices;
use crate::components::class_modal::ClassModal;
use crate::components::header::Header;
use crate::config::SessionConfig;
use crate::net::adapter::select_backend;
use crate::net::api::ApiClient;
use crate::net::types::Modes;
use crate::pages::admin::AdminPanel;
use crate::pages::home::HomePanel;
use crate::pages::homework::HomeworkPanel;
use crate::pages::rebuses::RebusesPanel;
use crate::pages::schedule::SchedulePanel;
use crate::state::auth::AuthState;
use crate::state::nav::NavState;
use crate::util::storage::{BrowserStorage, SharedStore};
use crate::util::{browser, theme};

/// Route component. Renders the app only once mounted in the browser.
#[component]
pub fn WebAppPage() -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    view! {
        <Show
            when=move || mounted.get()
            fallback=|| view! { <div class="boot">"Loading…"</div> }
        >
            <WebApp/>
        </Show>
    }
}

#[component]
fn WebApp() -> impl IntoView {
    let store: SharedStore = Arc::new(BrowserStorage);
    let query_api = browser::query_param(&browser::location_search(), "api");
    let telegram_init = browser::telegram_init_data();
    let config = SessionConfig::load(store.as_ref(), query_api.as_deref(), telegram_init.as_deref());
    theme::apply(config.theme);

    let api = ApiClient::new(select_backend(&config, store.clone()), config.telegram_init_data.clone());

    let session = RwSignal::new(config);
    let auth = RwSignal::new(AuthState::loading());
    let nav = RwSignal::new(NavState::default());
    let modes = RwSignal::new(Modes::default());

    provide_context(AppServices { api: api.clone(), store });
    provide_context(session);
    provide_context(auth);
    provide_context(nav);
    provide_context(modes);

    let identity_api = api.clone();
    leptos::task::spawn_local(async move {
        let result = identity_api.me().await;
        auth.update(|state| state.resolve(result));
        if !auth.with_untracked(AuthState::is_admin) {
            nav.update(NavState::revoke_admin);
        }
    });

    leptos::task::spawn_local(async move {
        match api.modes().await {
            Ok(loaded) => modes.set(loaded),
            Err(e) => log::warn!("modes load failed: {e}"),
        }
    });

    view! {
        <div class="app">
            <Header/>
            <main class="panels">
                <HomePanel/>
                <HomeworkPanel/>
                <SchedulePanel/>
                <RebusesPanel/>
                <Show when=move || auth.with(AuthState::is_admin)>
                    <AdminPanel/>
                </Show>
            </main>
            <ClassModal/>
        </div>
    }
}
