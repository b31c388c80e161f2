//! Home panel: class status and shortcuts into the gated panels.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::request_panel;
use crate::config::SessionConfig;
use crate::state::auth::AuthState;
use crate::state::nav::{NavState, Panel};

/// One-line description of the selected class.
#[must_use]
pub fn class_summary(config: &SessionConfig) -> String {
    if config.has_selected_class() {
        format!("Current class: #{}", config.selected_class_id)
    } else {
        "No class selected yet.".to_owned()
    }
}

/// Footer hint naming the data source for this page load.
#[must_use]
pub fn data_source_hint(config: &SessionConfig) -> &'static str {
    if config.uses_remote_api() {
        "Connected to the school bot."
    } else {
        "Demo mode: data is stored in this browser only."
    }
}

#[component]
pub fn HomePanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionConfig>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let on_choose = move |_| nav.update(NavState::open_class_modal);
    let on_homework = move |_| {
        request_panel(nav, session, auth, Panel::Homework);
    };

    view! {
        <section class="panel" class:active=move || nav.with(|n| n.active == Panel::Home)>
            <h1>"Class companion"</h1>
            <p class="muted">"Homework, schedules and rebuses for your class."</p>
            <p>{move || session.with(class_summary)}</p>
            <div class="row">
                <button on:click=on_choose>"Choose class"</button>
                <button class="primary" on:click=on_homework>"Open homework"</button>
            </div>
            <p class="muted small">{move || session.with(data_source_hint)}</p>
        </section>
    }
}
