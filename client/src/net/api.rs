//! Typed API client over the backend seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never build paths or touch JSON directly; they call one method per
//! endpoint here and receive the typed payload from `net::types`. The same
//! client runs against the live API and the mock store.
//!
//! DESIGN
//! ======
//! Identity and admin calls carry the Telegram init token as `?init=`
//! (URL-encoded) so the backend can authorize them. Public reads (homework,
//! schedule, rebuses, classes, modes) do not.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures surface as [`ApiError`]. Write endpoints
//! turn an `{ok: false, error}` body into [`WriteOutcome::Rejected`], which is
//! not an error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::adapter::{Backend, BackendMode};
use super::error::ApiError;
use super::types::{
    Ack, Broadcast, ClassInfo, ClassList, Homework, HomeworkDelete, JoinRequest, Leaderboard, LeaderboardEntry, Me,
    Modes, Rebus, RebusDelete, RebusList, ScheduleAdd, ScheduleClear, ScheduleFiles, Stats, UserAction, UserList,
    UserLookup, UserRecord, WriteOutcome,
};

/// Append `init=<token>` to a request path.
#[must_use]
pub fn with_init(path: &str, token: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}init={encoded}")
}

/// `path?name=<value>` with the value URL-encoded.
#[must_use]
pub fn with_query(path: &str, name: &str, value: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new()).append_pair(name, value).finish();
    format!("{path}?{query}")
}

fn schedule_path(kind: &str) -> String {
    let kind: String = url::form_urlencoded::byte_serialize(kind.as_bytes()).collect();
    format!("/schedule/{kind}")
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}

fn body<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(payload)?)
}

#[derive(Clone)]
pub struct ApiClient {
    backend: Arc<dyn Backend>,
    init_token: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, init_token: impl Into<String>) -> Self {
        Self { backend, init_token: init_token.into() }
    }

    #[must_use]
    pub fn mode(&self) -> BackendMode {
        self.backend.mode()
    }

    fn authed(&self, path: &str) -> String {
        with_init(path, &self.init_token)
    }

    async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.backend.get(path).await?)
    }

    async fn write(&self, path: &str, payload: Value) -> Result<WriteOutcome, ApiError> {
        let ack: Ack = decode(self.backend.post(path, payload).await?)?;
        Ok(ack.into())
    }

    // -------------------------------------------------------------------------
    // Identity and classes
    // -------------------------------------------------------------------------

    pub async fn me(&self) -> Result<Me, ApiError> {
        self.get_as(&self.authed("/auth/me")).await
    }

    pub async fn classes(&self) -> Result<Vec<ClassInfo>, ApiError> {
        let list: ClassList = self.get_as("/classes").await?;
        Ok(list.classes)
    }

    pub async fn search_classes(&self, query: &str) -> Result<Vec<ClassInfo>, ApiError> {
        let list: ClassList = self.get_as(&with_query("/classes/search", "q", query.trim())).await?;
        Ok(list.classes)
    }

    pub async fn join_class(&self, class_id: u64, join_code: &str) -> Result<WriteOutcome, ApiError> {
        let payload = body(&JoinRequest { class_id, join_code: join_code.trim().to_owned() })?;
        self.write(&self.authed("/classes/join"), payload).await
    }

    // -------------------------------------------------------------------------
    // Homework
    // -------------------------------------------------------------------------

    pub async fn homework(&self, date: &str) -> Result<Homework, ApiError> {
        self.get_as(&with_query("/homework", "date", date)).await
    }

    pub async fn save_homework(&self, date: &str, text: &str) -> Result<WriteOutcome, ApiError> {
        let payload = body(&Homework { date: date.to_owned(), text: text.to_owned() })?;
        self.write(&self.authed("/homework"), payload).await
    }

    pub async fn delete_homework(&self, date: &str) -> Result<WriteOutcome, ApiError> {
        let payload = body(&HomeworkDelete { date: date.to_owned() })?;
        self.write(&self.authed("/homework/delete"), payload).await
    }

    // -------------------------------------------------------------------------
    // Schedule
    // -------------------------------------------------------------------------

    pub async fn schedule(&self, kind: &str) -> Result<ScheduleFiles, ApiError> {
        self.get_as(&schedule_path(kind)).await
    }

    /// Same listing as [`Self::schedule`], authorized as the admin view.
    pub async fn schedule_admin(&self, kind: &str) -> Result<ScheduleFiles, ApiError> {
        self.get_as(&self.authed(&schedule_path(kind))).await
    }

    pub async fn add_schedule_file(&self, kind: &str, file_id: &str) -> Result<WriteOutcome, ApiError> {
        let payload = body(&ScheduleAdd { kind: kind.to_owned(), file_id: file_id.trim().to_owned() })?;
        self.write(&self.authed("/schedule"), payload).await
    }

    pub async fn clear_schedule(&self, kind: &str) -> Result<WriteOutcome, ApiError> {
        let payload = body(&ScheduleClear { kind: kind.to_owned() })?;
        self.write(&self.authed("/schedule/clear"), payload).await
    }

    // -------------------------------------------------------------------------
    // Rebuses
    // -------------------------------------------------------------------------

    pub async fn rebuses(&self) -> Result<Vec<Rebus>, ApiError> {
        let list: RebusList = self.get_as("/rebuses").await?;
        Ok(list.items)
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let board: Leaderboard = self.get_as("/rebuses/top").await?;
        Ok(board.top)
    }

    pub async fn add_rebus(&self, rebus: &Rebus) -> Result<WriteOutcome, ApiError> {
        self.write(&self.authed("/rebuses"), body(rebus)?).await
    }

    pub async fn delete_rebus(&self, id: &str) -> Result<WriteOutcome, ApiError> {
        let payload = body(&RebusDelete { id: id.trim().to_owned() })?;
        self.write(&self.authed("/rebuses/delete"), payload).await
    }

    pub async fn purge_rebuses(&self) -> Result<WriteOutcome, ApiError> {
        self.write(&self.authed("/rebuses/purge"), Value::Object(serde_json::Map::new())).await
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    pub async fn users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let list: UserList = self.get_as(&self.authed("/users")).await?;
        Ok(list.users)
    }

    pub async fn user(&self, user_id: i64) -> Result<Option<UserRecord>, ApiError> {
        let lookup: UserLookup = self.get_as(&self.authed(&format!("/users/{user_id}"))).await?;
        Ok(lookup.user)
    }

    pub async fn block_user(&self, user_id: i64) -> Result<WriteOutcome, ApiError> {
        self.write(&self.authed("/users/block"), body(&UserAction { user_id })?).await
    }

    pub async fn unblock_user(&self, user_id: i64) -> Result<WriteOutcome, ApiError> {
        self.write(&self.authed("/users/unblock"), body(&UserAction { user_id })?).await
    }

    // -------------------------------------------------------------------------
    // Modes, stats, broadcast
    // -------------------------------------------------------------------------

    pub async fn modes(&self) -> Result<Modes, ApiError> {
        self.get_as("/modes").await
    }

    pub async fn set_modes(&self, modes: Modes) -> Result<WriteOutcome, ApiError> {
        self.write(&self.authed("/modes"), body(&modes)?).await
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get_as(&self.authed("/stats")).await
    }

    pub async fn broadcast(&self, request: &Broadcast) -> Result<WriteOutcome, ApiError> {
        self.write(&self.authed("/broadcast"), body(request)?).await
    }
}
