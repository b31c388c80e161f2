//! Homework panel: pick a date and show the entry for it.

use leptos::prelude::*;

use crate::app::use_api;
use crate::config::SessionConfig;
use crate::state::homework::{HomeworkCard, HomeworkState, homework_lines};
use crate::state::nav::{NavState, Panel};
use crate::util::{browser, dates};

#[component]
pub fn HomeworkPanel() -> impl IntoView {
    let api = use_api();
    let session = expect_context::<RwSignal<SessionConfig>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let homework = RwSignal::new(HomeworkState::default());

    let is_active = move || nav.with(|n| n.active == Panel::Homework);
    Effect::new(move || {
        if is_active() {
            homework.update(|h| h.on_activate(&dates::today_iso()));
        }
    });

    let on_load = move |_| {
        if !session.with_untracked(SessionConfig::has_selected_class) {
            nav.update(NavState::open_class_modal);
            return;
        }
        let date = match homework.with_untracked(|h| h.request_date().map(str::to_owned)) {
            Ok(date) => date,
            Err(msg) => {
                browser::alert(msg);
                return;
            }
        };
        let api = api.get_value();
        homework.update(|h| h.busy = true);
        leptos::task::spawn_local(async move {
            let result = api.homework(&date).await;
            homework.update(|h| {
                h.busy = false;
                match result {
                    Ok(entry) => h.show(&date, entry),
                    Err(e) => h.card = HomeworkCard::Failed(e.user_message("homework").to_owned()),
                }
            });
        });
    };

    let card = move || {
        homework.with(|h| match &h.card {
            HomeworkCard::Empty => ().into_any(),
            HomeworkCard::Failed(msg) => view! { <div class="muted">{msg.clone()}</div> }.into_any(),
            HomeworkCard::Loaded(entry) => {
                let lines = homework_lines(&entry.text)
                    .into_iter()
                    .map(|line| view! { <div>{line}</div> })
                    .collect_view();
                view! {
                    <div class="hw-card">
                        <div class="hw-head">
                            <div class="sticker">"📌"</div>
                            <b>{entry.date.clone()}</b>
                        </div>
                        <div class="hw-body">{lines}</div>
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <section class="panel" class:active=is_active>
            <h2>"Homework"</h2>
            <div class="row">
                <input
                    type="date"
                    prop:value=move || homework.with(|h| h.date.clone())
                    on:input=move |ev| homework.update(|h| h.date = event_target_value(&ev))
                />
                <button on:click=move |_| homework.update(HomeworkState::set_today)>"Today"</button>
                <button on:click=move |_| homework.update(HomeworkState::set_tomorrow)>"Tomorrow"</button>
                <button class="primary" on:click=on_load disabled=move || homework.with(|h| h.busy)>
                    "Load"
                </button>
            </div>
            <div class="hw-cards">{card}</div>
        </section>
    }
}
