//! The document behind mock mode.
//!
//! DESIGN
//! ======
//! A single serde document persisted under `mock_data`. It is seeded on first
//! load (or when the stored copy cannot be read), mutated only by mock POST
//! handlers, and written back after every mutation. Nothing is ever evicted.

#[cfg(test)]
#[path = "mock_store_test.rs"]
mod mock_store_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{ClassInfo, LeaderboardEntry, Modes, Rebus, UserRecord};
use crate::util::storage::{KeyValueStore, keys, load_json, save_json};

/// Shown for dates without a stored entry.
pub const DEMO_HOMEWORK: &str = "Demo: Math §12 Nos. 3-5\nRussian ex. 24";

/// A class as kept by the mock store, including its private join code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockClass {
    pub id: u64,
    pub title: String,
    pub school: String,
    pub city: String,
    #[serde(default)]
    pub join_code: Option<String>,
}

impl MockClass {
    #[must_use]
    pub fn info(&self) -> ClassInfo {
        ClassInfo {
            id: self.id,
            title: self.title.clone(),
            school: self.school.clone(),
            city: self.city.clone(),
        }
    }

    /// Case-insensitive substring match on title, school, or city.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || [&self.title, &self.school, &self.city]
                .iter()
                .any(|field| field.to_lowercase().contains(&q))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockStore {
    #[serde(default)]
    pub homework: BTreeMap<String, String>,
    #[serde(default)]
    pub schedule: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub rebuses: Vec<Rebus>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub classes: Vec<MockClass>,
    #[serde(default)]
    pub modes: Modes,
    /// Rebus sessions played, reported by `/stats`.
    #[serde(default)]
    pub sessions: u64,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seed()
    }
}

impl MockStore {
    /// Demo data for a first visit.
    #[must_use]
    pub fn seed() -> Self {
        let rebus = |id: &str, kind: &str, payload: &str, answer: &str, difficulty: &str| Rebus {
            id: Some(id.to_owned()),
            kind: kind.to_owned(),
            payload: payload.to_owned(),
            answer: answer.to_owned(),
            difficulty: difficulty.to_owned(),
        };
        let user = |user_id: i64, username: &str, first_name: &str| UserRecord {
            user_id,
            username: Some(username.to_owned()),
            first_name: Some(first_name.to_owned()),
            muted_all: false,
        };
        Self {
            homework: BTreeMap::new(),
            schedule: BTreeMap::from([
                ("today".to_owned(), Vec::new()),
                ("tomorrow".to_owned(), Vec::new()),
                ("week".to_owned(), Vec::new()),
            ]),
            rebuses: vec![
                rebus("r2", "text", "100 + the letter A", "stoa", "easy"),
                rebus("r1", "text", "7 + letter YA (Russian)", "family", "medium"),
            ],
            leaderboard: vec![
                LeaderboardEntry { user_id: 101, username: "masha".to_owned(), score: 42 },
                LeaderboardEntry { user_id: 102, username: "petya".to_owned(), score: 35 },
            ],
            users: vec![user(101, "masha", "Masha"), user(102, "petya", "Petya")],
            classes: vec![
                MockClass {
                    id: 1,
                    title: "8A".to_owned(),
                    school: "School 1".to_owned(),
                    city: "Moscow".to_owned(),
                    join_code: None,
                },
                MockClass {
                    id: 2,
                    title: "9B".to_owned(),
                    school: "Lyceum 2".to_owned(),
                    city: "Kazan".to_owned(),
                    join_code: Some("ZX42".to_owned()),
                },
            ],
            modes: Modes::default(),
            sessions: 420,
        }
    }

    /// Load the stored document, seeding and persisting it when absent.
    pub fn load_or_seed(store: &dyn KeyValueStore) -> Self {
        if let Some(existing) = load_json::<Self>(store, keys::MOCK_DATA) {
            return existing;
        }
        log::info!("seeding mock data store");
        let seeded = Self::seed();
        seeded.persist(store);
        seeded
    }

    pub fn persist(&self, store: &dyn KeyValueStore) {
        save_json(store, keys::MOCK_DATA, self);
    }

    #[must_use]
    pub fn class(&self, id: u64) -> Option<&MockClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Leaderboard sorted by score, highest first.
    #[must_use]
    pub fn ranked_leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut top = self.leaderboard.clone();
        top.sort_by(|a, b| b.score.cmp(&a.score).then(a.user_id.cmp(&b.user_id)));
        top
    }

    /// Set `muted_all` on a user. Returns `false` when the user is unknown.
    pub fn set_muted(&mut self, user_id: i64, muted: bool) -> bool {
        match self.users.iter_mut().find(|u| u.user_id == user_id) {
            Some(user) => {
                user.muted_all = muted;
                true
            }
            None => false,
        }
    }
}
