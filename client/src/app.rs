//! Root application component with routing and shared context types.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SessionConfig;
use crate::net::api::ApiClient;
use crate::pages::webapp::WebAppPage;
use crate::state::auth::AuthState;
use crate::state::nav::{NavOutcome, NavState, Panel};
use crate::util::storage::SharedStore;

const TELEGRAM_WEB_APP_JS: &str = "https://telegram.org/js/telegram-web-app.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=TELEGRAM_WEB_APP_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/classmate.css"/>
        <Title text="Classmate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WebAppPage/>
            </Routes>
        </Router>
    }
}

/// Per-page-load services, provided once the page is mounted in the browser.
#[derive(Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub store: SharedStore,
}

/// The API client as a `Copy` handle for event handlers.
pub fn use_api() -> StoredValue<ApiClient> {
    StoredValue::new(expect_context::<AppServices>().api)
}

/// Mutate the session config and write it through to storage.
pub fn update_session(session: RwSignal<SessionConfig>, store: &SharedStore, f: impl FnOnce(&mut SessionConfig)) {
    session.update(f);
    session.with_untracked(|config| config.save(store.as_ref()));
}

/// Route a navigation request through the class gate and admin guard.
pub fn request_panel(
    nav: RwSignal<NavState>,
    session: RwSignal<SessionConfig>,
    auth: RwSignal<AuthState>,
    panel: Panel,
) -> NavOutcome {
    let has_class = session.with_untracked(SessionConfig::has_selected_class);
    let is_admin = auth.with_untracked(AuthState::is_admin);
    let mut outcome = NavOutcome::AdminOnly;
    nav.update(|state| outcome = state.request(panel, has_class, is_admin));
    if outcome != NavOutcome::Activated(panel) {
        log::debug!("navigation to {} blocked: {outcome:?}", panel.key());
    }
    outcome
}
