//! Rebus panel: puzzle list with hidden answers, and the leaderboard.

#[cfg(test)]
#[path = "rebuses_test.rs"]
mod rebuses_test;

use leptos::prelude::*;

use crate::app::use_api;
use crate::config::SessionConfig;
use crate::net::types::{LeaderboardEntry, Rebus};
use crate::state::nav::{NavState, Panel};

pub const NO_REBUSES: &str = "No rebuses yet.";
pub const NO_SCORES: &str = "Nobody has scored yet.";

/// A ranked leaderboard line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub score: i64,
}

/// Number the entries in the order given, naming anonymous players by id.
#[must_use]
pub fn leaderboard_rows(top: &[LeaderboardEntry]) -> Vec<LeaderboardRow> {
    top.iter()
        .enumerate()
        .map(|(i, entry)| LeaderboardRow {
            rank: i + 1,
            name: if entry.username.is_empty() {
                format!("id {}", entry.user_id)
            } else {
                format!("@{}", entry.username)
            },
            score: entry.score,
        })
        .collect()
}

/// CSS modifier for a difficulty chip; unknown values render neutral.
#[must_use]
pub fn difficulty_class(difficulty: &str) -> &'static str {
    match difficulty.trim().to_ascii_lowercase().as_str() {
        "easy" => "chip chip--easy",
        "medium" => "chip chip--medium",
        "hard" => "chip chip--hard",
        _ => "chip",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct RebusView {
    items: Option<Result<Vec<Rebus>, String>>,
    top: Option<Result<Vec<LeaderboardRow>, String>>,
}

#[component]
pub fn RebusesPanel() -> impl IntoView {
    let api = use_api();
    let session = expect_context::<RwSignal<SessionConfig>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let view_state = RwSignal::new(RebusView::default());

    let on_load = move |_| {
        if !session.with_untracked(SessionConfig::has_selected_class) {
            nav.update(NavState::open_class_modal);
            return;
        }
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let items = api.rebuses().await.map_err(|e| e.user_message("rebuses").to_owned());
            let top = api
                .leaderboard()
                .await
                .map(|top| leaderboard_rows(&top))
                .map_err(|e| e.user_message("leaderboard").to_owned());
            view_state.set(RebusView { items: Some(items), top: Some(top) });
        });
    };

    let items = move || {
        view_state.with(|v| match &v.items {
            None => ().into_any(),
            Some(Err(msg)) => view! { <div class="muted">{msg.clone()}</div> }.into_any(),
            Some(Ok(items)) if items.is_empty() => view! { <div class="muted">{NO_REBUSES}</div> }.into_any(),
            Some(Ok(items)) => items.iter().cloned().map(|rebus| view! { <RebusCard rebus/> }).collect_view().into_any(),
        })
    };

    let top = move || {
        view_state.with(|v| match &v.top {
            None => ().into_any(),
            Some(Err(msg)) => view! { <div class="muted">{msg.clone()}</div> }.into_any(),
            Some(Ok(rows)) if rows.is_empty() => view! { <div class="muted">{NO_SCORES}</div> }.into_any(),
            Some(Ok(rows)) => {
                let rows = rows
                    .iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.rank}</td>
                                <td>{row.name.clone()}</td>
                                <td><b>{row.score}</b></td>
                            </tr>
                        }
                    })
                    .collect_view();
                view! { <table class="leaderboard"><tbody>{rows}</tbody></table> }.into_any()
            }
        })
    };

    view! {
        <section class="panel" class:active=move || nav.with(|n| n.active == Panel::Rebuses)>
            <h2>"Rebuses"</h2>
            <button class="primary" on:click=on_load>"Load"</button>
            <div class="rebus-list">{items}</div>
            <h3>"Leaderboard"</h3>
            {top}
        </section>
    }
}

#[component]
fn RebusCard(rebus: Rebus) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let answer = rebus.answer.clone();

    view! {
        <div class="card rebus">
            <div class="rebus__head">
                <span class="muted">{rebus.kind.clone()}</span>
                <span class={difficulty_class(&rebus.difficulty)}>{rebus.difficulty.clone()}</span>
            </div>
            <div class="rebus__payload">{rebus.payload.clone()}</div>
            <button class="link" on:click=move |_| revealed.update(|r| *r = !*r)>
                {move || if revealed.get() { "Hide answer" } else { "Show answer" }}
            </button>
            <Show when=move || revealed.get()>
                <div class="rebus__answer">{answer.clone()}</div>
            </Show>
        </div>
    }
}
