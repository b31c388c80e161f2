//! Top bar: panel tabs, theme toggle, and the user badge.

use leptos::prelude::*;

use crate::app::{AppServices, request_panel, update_session};
use crate::config::SessionConfig;
use crate::state::auth::AuthState;
use crate::state::nav::{NavState, Panel};
use crate::util::theme;

#[component]
pub fn Header() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let session = expect_context::<RwSignal<SessionConfig>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let store = StoredValue::new(services.store);

    let on_theme = move |_| {
        store.with_value(|store| update_session(session, store, |config| {
            theme::apply(config.toggle_theme());
        }));
    };

    let tabs = move || {
        Panel::visible_tabs(auth.with(AuthState::is_admin))
            .into_iter()
            .map(|panel| {
                view! {
                    <button
                        class="tab"
                        class:active=move || nav.with(|n| n.active == panel)
                        on:click=move |_| {
                            request_panel(nav, session, auth, panel);
                        }
                    >
                        {panel.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="topbar">
            <nav class="tabs">{tabs}</nav>
            <div class="topbar__right">
                <button
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=on_theme
                >
                    {move || session.with(|c| c.theme.toggle_icon())}
                </button>
                <span class="user-badge" title=move || session.with(SessionConfig::api_label)>
                    {move || auth.with(AuthState::badge)}
                </span>
            </div>
        </header>
    }
}
