use super::*;

fn class(id: u64) -> ClassInfo {
    ClassInfo { id, title: "8A".into(), school: "School 1".into(), city: "Moscow".into() }
}

#[test]
fn parse_class_id_requires_number() {
    assert_eq!(parse_class_id(" 12 "), Ok(12));
    assert_eq!(parse_class_id(""), Err(ENTER_CLASS_ID));
    assert_eq!(parse_class_id("   "), Err(ENTER_CLASS_ID));
    assert_eq!(parse_class_id("8A"), Err(ENTER_CLASS_ID));
    assert_eq!(parse_class_id("-3"), Err(ENTER_CLASS_ID));
}

#[test]
fn pick_fills_join_form() {
    let mut state = ClassModalState::default();
    state.pick(&class(5));
    assert_eq!(state.class_id, "5");
    assert_eq!(state.join_target(), Ok(5));
}

#[test]
fn placeholder_for_empty_results() {
    let mut state = ClassModalState::default();
    assert_eq!(state.placeholder(), None);

    state.results = ClassResults::Loaded(Vec::new());
    assert_eq!(state.placeholder(), Some(NOTHING_FOUND));

    state.results = ClassResults::Loaded(vec![class(1)]);
    assert_eq!(state.placeholder(), None);

    state.results = ClassResults::Failed("Request failed.".into());
    assert_eq!(state.placeholder(), Some("Request failed."));
}

#[test]
fn join_rejection_messages() {
    assert_eq!(join_rejection(&WriteOutcome::Accepted { id: None }), None);
    assert_eq!(join_rejection(&WriteOutcome::Rejected("wrong join code".into())).as_deref(), Some("wrong join code"));
    assert_eq!(join_rejection(&WriteOutcome::Rejected(GENERIC_REJECTION.into())).as_deref(), Some(JOIN_FAILED));
}
