//! Calendar helpers for the homework date field (`YYYY-MM-DD`, local time).

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{Days, Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

#[must_use]
pub fn iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Today's local date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The day after `date`, saturating at the calendar's end.
#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

#[must_use]
pub fn today_iso() -> String {
    iso(today())
}

#[must_use]
pub fn tomorrow_iso() -> String {
    iso(next_day(today()))
}

/// Whether `raw` is a valid `YYYY-MM-DD` date.
#[must_use]
pub fn is_iso_date(raw: &str) -> bool {
    raw.len() == 10 && NaiveDate::parse_from_str(raw, ISO_FORMAT).is_ok()
}
