use super::*;

#[test]
fn activation_defaults_empty_date_to_today() {
    let mut state = HomeworkState::default();
    state.on_activate("2025-10-17");
    assert_eq!(state.date, "2025-10-17");
}

#[test]
fn activation_keeps_chosen_date() {
    let mut state = HomeworkState { date: "2025-09-01".into(), ..HomeworkState::default() };
    state.on_activate("2025-10-17");
    assert_eq!(state.date, "2025-09-01");
}

#[test]
fn shortcuts_set_iso_dates() {
    let mut state = HomeworkState::default();
    state.set_today();
    assert_eq!(state.date, dates::today_iso());
    state.set_tomorrow();
    assert_eq!(state.date, dates::tomorrow_iso());
    assert!(dates::is_iso_date(&state.date));
}

#[test]
fn request_date_requires_value() {
    let state = HomeworkState::default();
    assert_eq!(state.request_date(), Err(PICK_DATE));
    let state = HomeworkState { date: " 2025-10-17 ".into(), ..HomeworkState::default() };
    assert_eq!(state.request_date(), Ok("2025-10-17"));
}

#[test]
fn show_fills_missing_date() {
    let mut state = HomeworkState::default();
    state.show("2025-10-17", Homework { date: String::new(), text: "Read".into() });
    assert_eq!(
        state.card,
        HomeworkCard::Loaded(Homework { date: "2025-10-17".into(), text: "Read".into() })
    );
}

#[test]
fn lines_split_on_literal_and_real_newlines() {
    assert_eq!(homework_lines("Math §12\\nRussian ex. 24"), vec!["Math §12", "Russian ex. 24"]);
    assert_eq!(homework_lines("a\nb\\nc"), vec!["a", "b", "c"]);
}

#[test]
fn empty_text_shows_no_entries() {
    assert_eq!(homework_lines(""), vec![NO_ENTRIES]);
    assert_eq!(homework_lines("  \n"), vec![NO_ENTRIES]);
}
