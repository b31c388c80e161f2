//! Class picker modal: list or search classes, then join one.
//!
//! ERROR HANDLING
//! ==============
//! A missing or non-numeric id is reported with a blocking alert before any
//! request is sent. A refused join alerts the backend's message; a transport
//! failure alerts the static failure text. Neither changes the selection.

use leptos::prelude::*;

use crate::app::{AppServices, update_session, use_api};
use crate::config::SessionConfig;
use crate::net::error::ApiError;
use crate::net::types::ClassInfo;
use crate::pages::home::class_summary;
use crate::state::class_modal::{ClassModalState, ClassResults, join_rejection};
use crate::state::nav::NavState;
use crate::util::browser;

#[component]
pub fn ClassModal() -> impl IntoView {
    let api = use_api();
    let store = StoredValue::new(expect_context::<AppServices>().store);
    let session = expect_context::<RwSignal<SessionConfig>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let modal = RwSignal::new(ClassModalState::default());

    let show_results = move |result: Result<Vec<ClassInfo>, ApiError>| {
        let results = match result {
            Ok(classes) => ClassResults::Loaded(classes),
            Err(e) => ClassResults::Failed(e.user_message("class list").to_owned()),
        };
        modal.update(|m| {
            m.results = results;
            m.busy = false;
        });
    };

    let on_list_all = move |_| {
        let api = api.get_value();
        modal.update(|m| m.busy = true);
        leptos::task::spawn_local(async move {
            show_results(api.classes().await);
        });
    };

    let on_search = move |_| {
        let api = api.get_value();
        let query = modal.with_untracked(|m| m.query.clone());
        modal.update(|m| m.busy = true);
        leptos::task::spawn_local(async move {
            show_results(api.search_classes(&query).await);
        });
    };

    let on_join = move |_| {
        let class_id = match modal.with_untracked(ClassModalState::join_target) {
            Ok(id) => id,
            Err(msg) => {
                browser::alert(msg);
                return;
            }
        };
        let join_code = modal.with_untracked(|m| m.join_code.clone());
        let api = api.get_value();
        modal.update(|m| m.busy = true);
        leptos::task::spawn_local(async move {
            let result = api.join_class(class_id, &join_code).await;
            modal.update(|m| m.busy = false);
            match result {
                Ok(outcome) => match join_rejection(&outcome) {
                    None => {
                        log::info!("joined class {class_id}");
                        store.with_value(|store| {
                            update_session(session, store, |c| c.select_class(&class_id.to_string()));
                        });
                        nav.update(NavState::close_class_modal);
                    }
                    Some(msg) => browser::alert(&msg),
                },
                Err(e) => browser::alert(e.user_message("join class")),
            }
        });
    };

    let on_close = move |_| nav.update(NavState::close_class_modal);

    let results = move || {
        modal.with(|m| {
            if let Some(text) = m.placeholder() {
                return view! { <div class="muted">{text.to_owned()}</div> }.into_any();
            }
            let ClassResults::Loaded(classes) = &m.results else {
                return ().into_any();
            };
            classes
                .iter()
                .map(|class| {
                    let picked = class.clone();
                    view! {
                        <li>
                            <button class="link" on:click=move |_| modal.update(|m| m.pick(&picked))>
                                {class.label()}
                            </button>
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="modal" class:hidden=move || !nav.with(|n| n.class_modal_open)>
            <div class="modal__card">
                <div class="modal__header">
                    <h2>"Choose a class"</h2>
                    <button class="modal__close" title="Close" on:click=on_close>"✕"</button>
                </div>

                <div class="row">
                    <input
                        type="search"
                        placeholder="Title, school or city"
                        prop:value=move || modal.with(|m| m.query.clone())
                        on:input=move |ev| modal.update(|m| m.query = event_target_value(&ev))
                    />
                    <button on:click=on_search disabled=move || modal.with(|m| m.busy)>"Search"</button>
                    <button on:click=on_list_all disabled=move || modal.with(|m| m.busy)>"All classes"</button>
                </div>
                <ul class="class-list">{results}</ul>

                <div class="row">
                    <input
                        type="text"
                        inputmode="numeric"
                        placeholder="Class id"
                        prop:value=move || modal.with(|m| m.class_id.clone())
                        on:input=move |ev| modal.update(|m| m.class_id = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Join code (if any)"
                        prop:value=move || modal.with(|m| m.join_code.clone())
                        on:input=move |ev| modal.update(|m| m.join_code = event_target_value(&ev))
                    />
                    <button class="primary" on:click=on_join disabled=move || modal.with(|m| m.busy)>
                        "Join"
                    </button>
                </div>
                <div class="muted">{move || session.with(class_summary)}</div>
            </div>
        </div>
    }
}
