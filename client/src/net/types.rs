//! Typed request and response payloads for every endpoint the web app uses.
//!
//! DESIGN
//! ======
//! The backend owns these shapes, so decoding is lenient: missing fields fall
//! back to defaults, string fields read `null` as empty, and ids, flags and
//! counts accept either numbers or strings. A payload that is not a JSON
//! object of the expected form is still a decode error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity returned by `/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Me {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_admin: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub user_id: Option<i64>,
}

impl Me {
    /// Header badge text: `@username` when known, otherwise the numeric id.
    /// An id of `0` is the anonymous placeholder and shows nothing.
    #[must_use]
    pub fn badge(&self) -> String {
        match (self.username.as_deref(), self.user_id) {
            (Some(name), _) if !name.is_empty() => format!("@{name}"),
            (_, Some(id)) if id != 0 => id.to_string(),
            _ => String::new(),
        }
    }
}

/// A school class as listed by `/classes` and `/classes/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(deserialize_with = "deserialize_u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub school: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub city: String,
}

impl ClassInfo {
    /// One-line label used in the class picker.
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts = vec![format!("#{} {}", self.id, self.title)];
        if !self.school.is_empty() {
            parts.push(self.school.clone());
        }
        if !self.city.is_empty() {
            parts.push(self.city.clone());
        }
        parts.join(" · ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassList {
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
}

/// Body of `POST /classes/join`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub class_id: u64,
    pub join_code: String,
}

/// Homework entry for a single date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomeworkDelete {
    pub date: String,
}

/// Schedule images for one section (`today`, `tomorrow`, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleFiles {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub kind: String,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAdd {
    pub kind: String,
    pub file_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleClear {
    pub kind: String,
}

/// A word puzzle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rebus {
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub payload: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub answer: String,
    #[serde(default = "default_difficulty", deserialize_with = "deserialize_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "medium".to_owned()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RebusList {
    #[serde(default)]
    pub items: Vec<Rebus>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RebusDelete {
    pub id: String,
}

/// One leaderboard row from `/rebuses/top`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "deserialize_i64")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_i64")]
    pub score: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(default)]
    pub top: Vec<LeaderboardEntry>,
}

/// A bot user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_i64")]
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub muted_all: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserLookup {
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Body of `POST /users/block` and `/users/unblock`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAction {
    pub user_id: i64,
}

/// Feature switches shared by `GET` and `POST /modes`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modes {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub vacation: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub maintenance: bool,
}

/// Usage snapshot from `/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub users: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub homework: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub rebuses: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub sessions: u64,
    /// `[label, count]` pairs. Null labels read as empty, numeric labels as text.
    #[serde(default, rename = "topClicks", deserialize_with = "deserialize_top_clicks")]
    pub top_clicks: Vec<(String, u64)>,
}

/// Audience of a broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastScope {
    All,
    AutoHomework,
    AutoHomeworkSchedule,
}

impl BroadcastScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::AutoHomework => "auto_homework",
            Self::AutoHomeworkSchedule => "auto_homework_schedule",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    pub scope: BroadcastScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Raw acknowledgement payload returned by write endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Result of a write call, as seen by the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Accepted { id: Option<String> },
    Rejected(String),
}

pub const GENERIC_REJECTION: &str = "Error";

impl From<Ack> for WriteOutcome {
    fn from(ack: Ack) -> Self {
        if ack.ok {
            Self::Accepted { id: ack.id }
        } else {
            Self::Rejected(
                ack.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| GENERIC_REJECTION.to_owned()),
            )
        }
    }
}

impl WriteOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Text for an output line: `success` when accepted, the rejection otherwise.
    #[must_use]
    pub fn message(&self, success: &str) -> String {
        match self {
            Self::Accepted { .. } => success.to_owned(),
            Self::Rejected(msg) => msg.clone(),
        }
    }
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// JS-style truthiness, used wherever the backend stores flags as 0/1 or "1".
#[must_use]
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(default_difficulty))
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn deserialize_top_clicks<'de, D>(deserializer: D) -> Result<Vec<(String, u64)>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(rows) = value else {
        return Ok(Vec::new());
    };
    Ok(rows
        .iter()
        .filter_map(|row| match row.as_array()?.as_slice() {
            [label, count, ..] => Some((label_from_value(label), count_from_value(count))),
            _ => None,
        })
        .collect())
}

fn label_from_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Missing, null, negative, and unparseable counts all read as zero.
fn count_from_value(value: &serde_json::Value) -> u64 {
    number_from_value(value).and_then(|n| u64::try_from(n).ok()).unwrap_or(0)
}

fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_from_value(&value).ok_or_else(|| D::Error::custom(format!("expected integer, got {value}")))
}

fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = deserialize_i64(deserializer)?;
    u64::try_from(n).map_err(|_| D::Error::custom(format!("expected non-negative integer, got {n}")))
}

fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    number_from_value(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected integer, got {value}")))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected id, got {other}"))),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
