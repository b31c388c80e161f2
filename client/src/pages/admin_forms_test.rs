use super::*;

// =============================================================
// Validation
// =============================================================

#[test]
fn homework_requires_date_and_text() {
    assert_eq!(validate_homework("", "x"), Err(ENTER_DATE_AND_TEXT));
    assert_eq!(validate_homework("2025-10-17", "  "), Err(ENTER_DATE_AND_TEXT));
    assert_eq!(
        validate_homework(" 2025-10-17 ", "Read §3"),
        Ok(("2025-10-17".to_owned(), "Read §3".to_owned()))
    );
}

#[test]
fn delete_requires_date() {
    assert_eq!(validate_date(" "), Err(ENTER_DATE));
    assert_eq!(validate_date("2025-10-17"), Ok("2025-10-17".to_owned()));
}

#[test]
fn schedule_requires_file_id() {
    assert_eq!(validate_file_id(""), Err(ENTER_FILE_ID));
    assert_eq!(validate_file_id(" AgAC "), Ok("AgAC".to_owned()));
}

#[test]
fn user_id_must_be_nonzero_integer() {
    assert_eq!(parse_user_id("42"), Ok(42));
    assert_eq!(parse_user_id(" -7 "), Ok(-7));
    assert_eq!(parse_user_id("0"), Err(ENTER_USER_ID));
    assert_eq!(parse_user_id(""), Err(ENTER_USER_ID));
    assert_eq!(parse_user_id("abc"), Err(ENTER_USER_ID));
}

#[test]
fn rebus_requires_payload_and_answer() {
    assert_eq!(build_rebus("text", "", "a", "easy"), Err(ENTER_REBUS));
    assert_eq!(build_rebus("text", "p", " ", "easy"), Err(ENTER_REBUS));
}

#[test]
fn rebus_defaults_kind_and_difficulty() {
    let rebus = build_rebus("", " p ", " a ", "impossible").unwrap();
    assert_eq!(rebus.kind, "text");
    assert_eq!(rebus.payload, "p");
    assert_eq!(rebus.answer, "a");
    assert_eq!(rebus.difficulty, "medium");
    assert_eq!(rebus.id, None);
}

#[test]
fn rebus_id_required() {
    assert_eq!(validate_rebus_id(""), Err(ENTER_REBUS_ID));
    assert_eq!(validate_rebus_id(" r1 "), Ok("r1".to_owned()));
}

// =============================================================
// Broadcast
// =============================================================

#[test]
fn broadcast_all_defaults_text() {
    let req = broadcast_request(BroadcastScope::All, "  ");
    assert_eq!(req.text.as_deref(), Some(DEFAULT_BROADCAST));
    let req = broadcast_request(BroadcastScope::All, "Picnic on Friday");
    assert_eq!(req.text.as_deref(), Some("Picnic on Friday"));
}

#[test]
fn broadcast_auto_scopes_carry_no_text() {
    assert_eq!(broadcast_request(BroadcastScope::AutoHomework, "ignored").text, None);
    assert_eq!(broadcast_request(BroadcastScope::AutoHomeworkSchedule, "").text, None);
}

#[test]
fn broadcast_success_per_scope() {
    assert_eq!(broadcast_success(BroadcastScope::All), "Broadcast accepted.");
    assert_ne!(broadcast_success(BroadcastScope::AutoHomework), broadcast_success(BroadcastScope::AutoHomeworkSchedule));
}

// =============================================================
// Output formatting
// =============================================================

#[test]
fn outcome_text_variants() {
    assert_eq!(outcome_text(Ok(WriteOutcome::Accepted { id: None }), "Saved."), "Saved.");
    assert_eq!(outcome_text(Ok(WriteOutcome::Rejected("forbidden".into())), "Saved."), "forbidden");
    assert_eq!(outcome_text(Err(ApiError::Transport("down".into())), "Saved."), "Request failed.");
}

#[test]
fn stats_rows_label_counters() {
    let stats = Stats { users: 120, homework: 350, rebuses: 50, sessions: 420, top_clicks: Vec::new() };
    let rows = stats_rows(&stats);
    assert_eq!(rows[0], ("Users", 120));
    assert_eq!(rows[3], ("Rebus sessions", 420));
}

#[test]
fn click_bars_scale_to_largest() {
    let bars = click_bars(&[("/start".into(), 200), ("homework".into(), 50)]);
    assert_eq!(bars[0].percent, 100);
    assert_eq!(bars[1].percent, 25);
    assert_eq!(bars[1].count, 50);
}

#[test]
fn click_bars_all_zero() {
    let bars = click_bars(&[("a".into(), 0)]);
    assert_eq!(bars[0].percent, 0);
    assert!(click_bars(&[]).is_empty());
}

#[test]
fn describe_user_includes_known_fields() {
    let user = UserRecord {
        user_id: 101,
        username: Some("masha".into()),
        first_name: Some("Masha".into()),
        muted_all: true,
    };
    assert_eq!(describe_user(&user), "#101 @masha (Masha) · blocked");

    let bare = UserRecord { user_id: 5, username: None, first_name: Some(String::new()), muted_all: false };
    assert_eq!(describe_user(&bare), "#5");
}

#[test]
fn file_list_text_empty_and_filled() {
    assert_eq!(file_list_text(&[]), EMPTY_LIST);
    assert_eq!(file_list_text(&["a".into(), "b".into()]), "a\nb");
}

#[test]
fn confirm_clear_names_section() {
    assert_eq!(confirm_clear_text("week"), "Clear the week section?");
}
