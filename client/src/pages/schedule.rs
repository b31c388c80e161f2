//! Schedule panel: images for today, tomorrow, or the week.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use leptos::prelude::*;

use crate::app::use_api;
use crate::config::SessionConfig;
use crate::net::remote::file_url;
use crate::state::nav::{NavState, Panel};

/// Selectable schedule sections as `(kind, label)`.
pub const SCHEDULE_KINDS: [(&str, &str); 3] = [("today", "Today"), ("tomorrow", "Tomorrow"), ("week", "Week")];

pub const NO_SCHEDULE: &str = "No schedule for the selected section.";

/// How one schedule file is displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleImage {
    Url(String),
    /// No API to fetch from (mock mode); shows the file reference instead.
    Placeholder(String),
}

#[must_use]
pub fn schedule_images(api_base: &str, files: &[String]) -> Vec<ScheduleImage> {
    files
        .iter()
        .map(|file| match file_url(api_base, file) {
            Some(url) => ScheduleImage::Url(url),
            None => ScheduleImage::Placeholder(file.clone()),
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Listing {
    #[default]
    NotLoaded,
    Loaded(Vec<ScheduleImage>),
    Failed(String),
}

#[component]
pub fn SchedulePanel() -> impl IntoView {
    let api = use_api();
    let session = expect_context::<RwSignal<SessionConfig>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let kind = RwSignal::new(SCHEDULE_KINDS[0].0.to_owned());
    let listing = RwSignal::new(Listing::default());

    let on_load = move |_| {
        if !session.with_untracked(SessionConfig::has_selected_class) {
            nav.update(NavState::open_class_modal);
            return;
        }
        let api = api.get_value();
        let kind = kind.get_untracked();
        let api_base = session.with_untracked(|c| c.api_base.clone());
        leptos::task::spawn_local(async move {
            let next = match api.schedule(&kind).await {
                Ok(schedule) => Listing::Loaded(schedule_images(&api_base, &schedule.files)),
                Err(e) => Listing::Failed(e.user_message("schedule").to_owned()),
            };
            listing.set(next);
        });
    };

    let body = move || {
        listing.with(|l| match l {
            Listing::NotLoaded => ().into_any(),
            Listing::Failed(msg) => view! { <div class="muted">{msg.clone()}</div> }.into_any(),
            Listing::Loaded(images) if images.is_empty() => view! { <div class="muted">{NO_SCHEDULE}</div> }.into_any(),
            Listing::Loaded(images) => images
                .iter()
                .map(|image| match image {
                    ScheduleImage::Url(src) => view! { <img class="card schedule-img" src=src.clone()/> }.into_any(),
                    ScheduleImage::Placeholder(file) => {
                        view! { <div class="card schedule-placeholder">{format!("🖼 {file}")}</div> }.into_any()
                    }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <section class="panel" class:active=move || nav.with(|n| n.active == Panel::Schedule)>
            <h2>"Schedule"</h2>
            <div class="row">
                <select on:change=move |ev| kind.set(event_target_value(&ev))>
                    {SCHEDULE_KINDS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=value selected=move || kind.with(|k| k == value)>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="primary" on:click=on_load>"Load"</button>
            </div>
            <div class="schedule-list">{body}</div>
        </section>
    }
}
