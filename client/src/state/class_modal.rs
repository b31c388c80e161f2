//! Class picker state: listing, search, and the join form.
//!
//! DESIGN
//! ======
//! Input is validated here before any request is built, so the component
//! only decides between "alert and stop" and "send". The selected class is
//! not stored here; a successful join writes it to the session config.

#[cfg(test)]
#[path = "class_modal_test.rs"]
mod class_modal_test;

use crate::net::types::{ClassInfo, GENERIC_REJECTION, WriteOutcome};

pub const ENTER_CLASS_ID: &str = "Enter a class id.";
pub const JOIN_FAILED: &str = "Could not join the class.";
pub const NOTHING_FOUND: &str = "Nothing found";

/// What the class list area currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ClassResults {
    #[default]
    NotLoaded,
    Loaded(Vec<ClassInfo>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassModalState {
    pub query: String,
    pub class_id: String,
    pub join_code: String,
    pub results: ClassResults,
    pub busy: bool,
}

impl ClassModalState {
    /// Copy a listed class into the join form.
    pub fn pick(&mut self, class: &ClassInfo) {
        self.class_id = class.id.to_string();
    }

    /// Validated class id from the form.
    pub fn join_target(&self) -> Result<u64, &'static str> {
        parse_class_id(&self.class_id)
    }

    /// Text for the list area when there is nothing to list.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match &self.results {
            ClassResults::NotLoaded => None,
            ClassResults::Loaded(classes) if classes.is_empty() => Some(NOTHING_FOUND),
            ClassResults::Loaded(_) => None,
            ClassResults::Failed(msg) => Some(msg.as_str()),
        }
    }
}

/// A class id must be a non-empty unsigned number.
pub fn parse_class_id(raw: &str) -> Result<u64, &'static str> {
    raw.trim().parse::<u64>().map_err(|_| ENTER_CLASS_ID)
}

/// Alert text for a join attempt the backend refused, or `None` when it
/// was accepted.
#[must_use]
pub fn join_rejection(outcome: &WriteOutcome) -> Option<String> {
    match outcome {
        WriteOutcome::Accepted { .. } => None,
        WriteOutcome::Rejected(msg) if msg == GENERIC_REJECTION => Some(JOIN_FAILED.to_owned()),
        WriteOutcome::Rejected(msg) => Some(msg.clone()),
    }
}
