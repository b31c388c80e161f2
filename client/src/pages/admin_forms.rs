//! Input validation and output formatting for the admin panel.
//!
//! DESIGN
//! ======
//! Every admin action validates its inputs here before a request is built;
//! a validation failure is written to the section's output line and nothing
//! is sent. Kept free of Leptos so the rules are testable natively.

#[cfg(test)]
#[path = "admin_forms_test.rs"]
mod admin_forms_test;

use crate::net::error::ApiError;
use crate::net::types::{Broadcast, BroadcastScope, Rebus, Stats, UserRecord, WriteOutcome};

pub const ENTER_DATE_AND_TEXT: &str = "Enter a date and text.";
pub const ENTER_DATE: &str = "Enter a date.";
pub const ENTER_FILE_ID: &str = "Paste a Telegram file_id.";
pub const ENTER_USER_ID: &str = "Enter a user_id.";
pub const ENTER_REBUS: &str = "Fill in the puzzle and the answer.";
pub const ENTER_REBUS_ID: &str = "Enter a rebus id.";
pub const EMPTY_LIST: &str = "Empty";
pub const USER_NOT_FOUND: &str = "User not found.";

pub const DEFAULT_BROADCAST: &str = "Important message for all users.";
pub const REBUS_DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

pub fn validate_homework(date: &str, text: &str) -> Result<(String, String), &'static str> {
    let date = date.trim();
    if date.is_empty() || text.trim().is_empty() {
        return Err(ENTER_DATE_AND_TEXT);
    }
    Ok((date.to_owned(), text.to_owned()))
}

pub fn validate_date(date: &str) -> Result<String, &'static str> {
    let date = date.trim();
    if date.is_empty() { Err(ENTER_DATE) } else { Ok(date.to_owned()) }
}

pub fn validate_file_id(file_id: &str) -> Result<String, &'static str> {
    let file_id = file_id.trim();
    if file_id.is_empty() { Err(ENTER_FILE_ID) } else { Ok(file_id.to_owned()) }
}

/// A user id must be a non-zero integer.
pub fn parse_user_id(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ENTER_USER_ID),
    }
}

pub fn build_rebus(kind: &str, payload: &str, answer: &str, difficulty: &str) -> Result<Rebus, &'static str> {
    let (payload, answer) = (payload.trim(), answer.trim());
    if payload.is_empty() || answer.is_empty() {
        return Err(ENTER_REBUS);
    }
    let kind = match kind.trim() {
        "" => "text",
        other => other,
    };
    let difficulty = if REBUS_DIFFICULTIES.contains(&difficulty) { difficulty } else { "medium" };
    Ok(Rebus {
        id: None,
        kind: kind.to_owned(),
        payload: payload.to_owned(),
        answer: answer.to_owned(),
        difficulty: difficulty.to_owned(),
    })
}

pub fn validate_rebus_id(raw: &str) -> Result<String, &'static str> {
    let id = raw.trim();
    if id.is_empty() { Err(ENTER_REBUS_ID) } else { Ok(id.to_owned()) }
}

/// Broadcast body for a scope. Only `all` carries text, defaulting to the
/// standard announcement when the field is blank.
#[must_use]
pub fn broadcast_request(scope: BroadcastScope, text: &str) -> Broadcast {
    let text = match scope {
        BroadcastScope::All => Some(match text.trim() {
            "" => DEFAULT_BROADCAST.to_owned(),
            other => other.to_owned(),
        }),
        BroadcastScope::AutoHomework | BroadcastScope::AutoHomeworkSchedule => None,
    };
    Broadcast { scope, text }
}

/// Output line after a broadcast was accepted.
#[must_use]
pub fn broadcast_success(scope: BroadcastScope) -> &'static str {
    match scope {
        BroadcastScope::All => "Broadcast accepted.",
        BroadcastScope::AutoHomework => "Homework digest sent.",
        BroadcastScope::AutoHomeworkSchedule => "Homework and schedule digest sent.",
    }
}

/// Output line for a write call.
#[must_use]
pub fn outcome_text(result: Result<WriteOutcome, ApiError>, success: &str) -> String {
    match result {
        Ok(outcome) => outcome.message(success),
        Err(e) => e.user_message("admin write").to_owned(),
    }
}

/// Labelled counters for the stats table.
#[must_use]
pub fn stats_rows(stats: &Stats) -> [(&'static str, u64); 4] {
    [
        ("Users", stats.users),
        ("Homework entries", stats.homework),
        ("Rebuses", stats.rebuses),
        ("Rebus sessions", stats.sessions),
    ]
}

/// One bar of the top-clicks chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickBar {
    pub label: String,
    pub count: u64,
    /// Width relative to the largest count, 0-100.
    pub percent: u64,
}

#[must_use]
pub fn click_bars(top_clicks: &[(String, u64)]) -> Vec<ClickBar> {
    let max = top_clicks.iter().map(|(_, n)| *n).max().unwrap_or(0);
    top_clicks
        .iter()
        .map(|(label, count)| ClickBar {
            label: label.clone(),
            count: *count,
            percent: if max == 0 { 0 } else { count.saturating_mul(100) / max },
        })
        .collect()
}

/// `#id @username (First name) · blocked`
#[must_use]
pub fn describe_user(user: &UserRecord) -> String {
    let mut line = format!("#{}", user.user_id);
    if let Some(name) = user.username.as_deref().filter(|n| !n.is_empty()) {
        line.push_str(&format!(" @{name}"));
    }
    if let Some(first) = user.first_name.as_deref().filter(|n| !n.is_empty()) {
        line.push_str(&format!(" ({first})"));
    }
    if user.muted_all {
        line.push_str(" · blocked");
    }
    line
}

/// One file reference per line, or [`EMPTY_LIST`].
#[must_use]
pub fn file_list_text(files: &[String]) -> String {
    if files.is_empty() { EMPTY_LIST.to_owned() } else { files.join("\n") }
}

#[must_use]
pub fn confirm_clear_text(kind: &str) -> String {
    format!("Clear the {kind} section?")
}

pub const CONFIRM_PURGE: &str = "Delete all rebuses and the leaderboard?";
