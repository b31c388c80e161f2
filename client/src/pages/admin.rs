//! Admin panel: content management, users, modes, stats, and broadcasts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only when the identity check reported an admin. That is a display
//! guard; every call here carries the Telegram init token and the backend
//! decides whether to honour it.
//!
//! ERROR HANDLING
//! ==============
//! Each section owns one output line. Validation messages, backend
//! rejections, and the static transport failure text all land there.

use leptos::prelude::*;

use crate::app::use_api;
use crate::net::types::{BroadcastScope, Modes, Stats, UserRecord, WriteOutcome};
use crate::pages::admin_forms::{
    CONFIRM_PURGE, REBUS_DIFFICULTIES, USER_NOT_FOUND, broadcast_request, broadcast_success, build_rebus, click_bars,
    confirm_clear_text, describe_user, file_list_text, outcome_text, parse_user_id, stats_rows, validate_date,
    validate_file_id, validate_homework, validate_rebus_id,
};
use crate::pages::schedule::SCHEDULE_KINDS;
use crate::state::nav::{NavState, Panel};
use crate::util::browser;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <section class="panel admin" class:active=move || nav.with(|n| n.active == Panel::Admin)>
            <h2>"Admin"</h2>
            <AdminHomework/>
            <AdminSchedule/>
            <AdminUsers/>
            <AdminRebuses/>
            <AdminModes/>
            <AdminStats/>
            <AdminBroadcast/>
        </section>
    }
}

fn bind_text(signal: RwSignal<String>) -> (impl Fn() -> String + Copy, impl Fn(leptos::ev::Event) + Copy) {
    (move || signal.get(), move |ev| signal.set(event_target_value(&ev)))
}

#[component]
fn AdminHomework() -> impl IntoView {
    let api = use_api();
    let date = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let (date_value, on_date) = bind_text(date);
    let (text_value, on_text) = bind_text(text);

    let on_save = move |_| {
        let (date, text) = match validate_homework(&date.get_untracked(), &text.get_untracked()) {
            Ok(fields) => fields,
            Err(msg) => return output.set(msg.to_owned()),
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.save_homework(&date, &text).await, "Saved."));
        });
    };

    let on_delete = move |_| {
        let date = match validate_date(&date.get_untracked()) {
            Ok(date) => date,
            Err(msg) => return output.set(msg.to_owned()),
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.delete_homework(&date).await, "Deleted."));
        });
    };

    view! {
        <div class="card admin-section">
            <h3>"Homework"</h3>
            <input type="date" prop:value=date_value on:input=on_date/>
            <textarea rows="4" placeholder="Homework text" prop:value=text_value on:input=on_text></textarea>
            <div class="row">
                <button class="primary" on:click=on_save>"Save"</button>
                <button on:click=on_delete>"Delete"</button>
            </div>
            <pre class="out">{move || output.get()}</pre>
        </div>
    }
}

#[component]
fn AdminSchedule() -> impl IntoView {
    let api = use_api();
    let kind = RwSignal::new(SCHEDULE_KINDS[0].0.to_owned());
    let file_id = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let (file_value, on_file) = bind_text(file_id);

    let on_add = move |_| {
        let file_id = match validate_file_id(&file_id.get_untracked()) {
            Ok(id) => id,
            Err(msg) => return output.set(msg.to_owned()),
        };
        let (api, kind) = (api.get_value(), kind.get_untracked());
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.add_schedule_file(&kind, &file_id).await, "File added."));
        });
    };

    let on_clear = move |_| {
        let kind = kind.get_untracked();
        if !browser::confirm(&confirm_clear_text(&kind)) {
            return;
        }
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.clear_schedule(&kind).await, "Cleared."));
        });
    };

    let on_list = move |_| {
        let (api, kind) = (api.get_value(), kind.get_untracked());
        leptos::task::spawn_local(async move {
            let text = match api.schedule_admin(&kind).await {
                Ok(schedule) => file_list_text(&schedule.files),
                Err(e) => e.user_message("schedule list").to_owned(),
            };
            output.set(text);
        });
    };

    view! {
        <div class="card admin-section">
            <h3>"Schedule"</h3>
            <div class="row">
                <select on:change=move |ev| kind.set(event_target_value(&ev))>
                    {SCHEDULE_KINDS
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <input type="text" placeholder="Telegram file_id" prop:value=file_value on:input=on_file/>
            </div>
            <div class="row">
                <button class="primary" on:click=on_add>"Add"</button>
                <button on:click=on_clear>"Clear"</button>
                <button on:click=on_list>"List"</button>
            </div>
            <pre class="out">{move || output.get()}</pre>
        </div>
    }
}

#[component]
fn AdminUsers() -> impl IntoView {
    let api = use_api();
    let user_id = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let (id_value, on_id) = bind_text(user_id);

    let on_list = move |_| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match api.users().await {
                Ok(list) => {
                    output.set(format!("{} users", list.len()));
                    users.set(list);
                }
                Err(e) => output.set(e.user_message("user list").to_owned()),
            }
        });
    };

    let on_lookup = move |_| {
        let id = match parse_user_id(&user_id.get_untracked()) {
            Ok(id) => id,
            Err(msg) => return output.set(msg.to_owned()),
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let text = match api.user(id).await {
                Ok(Some(user)) => describe_user(&user),
                Ok(None) => USER_NOT_FOUND.to_owned(),
                Err(e) => e.user_message("user lookup").to_owned(),
            };
            output.set(text);
        });
    };

    let set_blocked = move |blocked: bool| {
        let id = match parse_user_id(&user_id.get_untracked()) {
            Ok(id) => id,
            Err(msg) => return output.set(msg.to_owned()),
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let text = if blocked {
                outcome_text(api.block_user(id).await, "User blocked.")
            } else {
                outcome_text(api.unblock_user(id).await, "User unblocked.")
            };
            output.set(text);
        });
    };

    view! {
        <div class="card admin-section">
            <h3>"Users"</h3>
            <div class="row">
                <input type="text" inputmode="numeric" placeholder="user_id" prop:value=id_value on:input=on_id/>
                <button on:click=on_lookup>"Find"</button>
                <button on:click=move |_| set_blocked(true)>"Block"</button>
                <button on:click=move |_| set_blocked(false)>"Unblock"</button>
                <button on:click=on_list>"All users"</button>
            </div>
            <pre class="out">{move || output.get()}</pre>
            <ul class="user-list">
                {move || {
                    users
                        .get()
                        .iter()
                        .map(|user| view! { <li>{describe_user(user)}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn AdminRebuses() -> impl IntoView {
    let api = use_api();
    let kind = RwSignal::new("text".to_owned());
    let payload = RwSignal::new(String::new());
    let answer = RwSignal::new(String::new());
    let difficulty = RwSignal::new("medium".to_owned());
    let rebus_id = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let (kind_value, on_kind) = bind_text(kind);
    let (payload_value, on_payload) = bind_text(payload);
    let (answer_value, on_answer) = bind_text(answer);
    let (id_value, on_id) = bind_text(rebus_id);

    let on_add = move |_| {
        let rebus = match build_rebus(
            &kind.get_untracked(),
            &payload.get_untracked(),
            &answer.get_untracked(),
            &difficulty.get_untracked(),
        ) {
            Ok(rebus) => rebus,
            Err(msg) => return output.set(msg.to_owned()),
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let text = match api.add_rebus(&rebus).await {
                Ok(WriteOutcome::Accepted { id: Some(id) }) => format!("Rebus added ({id})."),
                other => outcome_text(other, "Rebus added."),
            };
            output.set(text);
        });
    };

    let on_delete = move |_| {
        let id = match validate_rebus_id(&rebus_id.get_untracked()) {
            Ok(id) => id,
            Err(msg) => return output.set(msg.to_owned()),
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.delete_rebus(&id).await, "Deleted."));
        });
    };

    let on_purge = move |_| {
        if !browser::confirm(CONFIRM_PURGE) {
            return;
        }
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.purge_rebuses().await, "All rebuses removed."));
        });
    };

    view! {
        <div class="card admin-section">
            <h3>"Rebuses"</h3>
            <div class="row">
                <input type="text" placeholder="Kind" prop:value=kind_value on:input=on_kind/>
                <select on:change=move |ev| difficulty.set(event_target_value(&ev))>
                    {REBUS_DIFFICULTIES
                        .into_iter()
                        .map(|d| view! { <option value=d selected=move || difficulty.with(|v| v == d)>{d}</option> })
                        .collect_view()}
                </select>
            </div>
            <input type="text" placeholder="Puzzle" prop:value=payload_value on:input=on_payload/>
            <input type="text" placeholder="Answer" prop:value=answer_value on:input=on_answer/>
            <div class="row">
                <button class="primary" on:click=on_add>"Add"</button>
                <input type="text" placeholder="Rebus id" prop:value=id_value on:input=on_id/>
                <button on:click=on_delete>"Delete"</button>
                <button class="danger" on:click=on_purge>"Delete all"</button>
            </div>
            <pre class="out">{move || output.get()}</pre>
        </div>
    }
}

#[component]
fn AdminModes() -> impl IntoView {
    let api = use_api();
    let modes = expect_context::<RwSignal<Modes>>();
    let output = RwSignal::new(String::new());

    let on_save = move |_| {
        let api = api.get_value();
        let current = modes.get_untracked();
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.set_modes(current).await, "Saved."));
        });
    };

    view! {
        <div class="card admin-section">
            <h3>"Modes"</h3>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || modes.with(|m| m.vacation)
                    on:change=move |ev| modes.update(|m| m.vacation = event_target_checked(&ev))
                />
                " Vacation"
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || modes.with(|m| m.maintenance)
                    on:change=move |ev| modes.update(|m| m.maintenance = event_target_checked(&ev))
                />
                " Maintenance"
            </label>
            <button class="primary" on:click=on_save>"Save"</button>
            <pre class="out">{move || output.get()}</pre>
        </div>
    }
}

#[component]
fn AdminStats() -> impl IntoView {
    let api = use_api();
    let stats = RwSignal::new(None::<Stats>);
    let output = RwSignal::new(String::new());

    let on_load = move |_| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match api.stats().await {
                Ok(loaded) => {
                    output.set(String::new());
                    stats.set(Some(loaded));
                }
                Err(e) => output.set(e.user_message("stats").to_owned()),
            }
        });
    };

    let body = move || {
        stats.with(|s| {
            let Some(s) = s else {
                return ().into_any();
            };
            let rows = stats_rows(s)
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <tr>
                            <td>{label}</td>
                            <td><b>{value}</b></td>
                        </tr>
                    }
                })
                .collect_view();
            let bars = click_bars(&s.top_clicks)
                .into_iter()
                .map(|bar| {
                    view! {
                        <div class="bar">
                            <span class="bar__label">{bar.label}</span>
                            <span class="bar__fill" style={format!("width: {}%", bar.percent)}></span>
                            <span class="bar__count">{bar.count}</span>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <table class="stats"><tbody>{rows}</tbody></table>
                <div class="bars">{bars}</div>
            }
            .into_any()
        })
    };

    view! {
        <div class="card admin-section">
            <h3>"Stats"</h3>
            <button on:click=on_load>"Refresh"</button>
            <pre class="out">{move || output.get()}</pre>
            {body}
        </div>
    }
}

#[component]
fn AdminBroadcast() -> impl IntoView {
    let api = use_api();
    let text = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let (text_value, on_text) = bind_text(text);

    let send = move |scope: BroadcastScope| {
        let request = broadcast_request(scope, &text.get_untracked());
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            output.set(outcome_text(api.broadcast(&request).await, broadcast_success(scope)));
        });
    };

    view! {
        <div class="card admin-section">
            <h3>"Broadcast"</h3>
            <textarea rows="3" placeholder="Message for everyone" prop:value=text_value on:input=on_text></textarea>
            <div class="row">
                <button class="primary" on:click=move |_| send(BroadcastScope::All)>"Send to all"</button>
                <button on:click=move |_| send(BroadcastScope::AutoHomework)>"Homework digest"</button>
                <button on:click=move |_| send(BroadcastScope::AutoHomeworkSchedule)>
                    "Homework + schedule digest"
                </button>
            </div>
            <pre class="out">{move || output.get()}</pre>
        </div>
    }
}
