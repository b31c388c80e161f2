//! Homework panel state: the date field and the last loaded card.

#[cfg(test)]
#[path = "homework_test.rs"]
mod homework_test;

use crate::net::types::Homework;
use crate::util::dates;

pub const PICK_DATE: &str = "Pick a date.";
pub const NO_ENTRIES: &str = "— No entries yet.";

/// What the card area shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HomeworkCard {
    #[default]
    Empty,
    Loaded(Homework),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeworkState {
    pub date: String,
    pub card: HomeworkCard,
    pub busy: bool,
}

impl HomeworkState {
    /// Called when the panel becomes active: an empty date becomes `today`.
    pub fn on_activate(&mut self, today: &str) {
        if self.date.trim().is_empty() {
            self.date = today.to_owned();
        }
    }

    pub fn set_today(&mut self) {
        self.date = dates::today_iso();
    }

    pub fn set_tomorrow(&mut self) {
        self.date = dates::tomorrow_iso();
    }

    /// Date to request, or the validation message.
    pub fn request_date(&self) -> Result<&str, &'static str> {
        let date = self.date.trim();
        if date.is_empty() { Err(PICK_DATE) } else { Ok(date) }
    }

    /// Store a response, falling back to the requested date when the payload
    /// carries none.
    pub fn show(&mut self, requested: &str, mut homework: Homework) {
        if homework.date.is_empty() {
            homework.date = requested.to_owned();
        }
        self.card = HomeworkCard::Loaded(homework);
    }
}

/// Split homework text into display lines.
///
/// Both real newlines and the literal two-character sequence `\n` (as stored
/// by the bot) break lines. Empty text yields the "no entries" line.
#[must_use]
pub fn homework_lines(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![NO_ENTRIES.to_owned()];
    }
    text.replace("\\n", "\n").split('\n').map(str::to_owned).collect()
}
