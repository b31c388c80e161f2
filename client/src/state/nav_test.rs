use super::*;

// =============================================================
// Panel
// =============================================================

#[test]
fn class_scoped_panels() {
    let scoped: Vec<Panel> = Panel::ALL.into_iter().filter(|p| p.is_class_scoped()).collect();
    assert_eq!(scoped, vec![Panel::Homework, Panel::Schedule, Panel::Rebuses]);
}

#[test]
fn admin_tab_only_for_admins() {
    assert!(!Panel::visible_tabs(false).contains(&Panel::Admin));
    assert_eq!(Panel::visible_tabs(true).len(), 5);
}

#[test]
fn default_panel_is_home() {
    let nav = NavState::default();
    assert_eq!(nav.active, Panel::Home);
    assert!(!nav.class_modal_open);
}

// =============================================================
// Gate
// =============================================================

#[test]
fn every_class_scoped_panel_is_gated() {
    for panel in Panel::ALL.into_iter().filter(|p| p.is_class_scoped()) {
        let mut nav = NavState { active: Panel::Home, class_modal_open: false };
        assert_eq!(nav.request(panel, false, true), NavOutcome::ClassRequired);
        assert_eq!(nav.active, Panel::Home);
        assert!(nav.class_modal_open);
    }
}

#[test]
fn gate_falls_back_to_home_from_other_panel() {
    let mut nav = NavState { active: Panel::Admin, class_modal_open: false };
    assert_eq!(nav.request(Panel::Schedule, false, true), NavOutcome::ClassRequired);
    assert_eq!(nav.active, Panel::Home);
}

#[test]
fn selected_class_opens_panel_directly() {
    let mut nav = NavState::default();
    assert_eq!(nav.request(Panel::Rebuses, true, false), NavOutcome::Activated(Panel::Rebuses));
    assert_eq!(nav.active, Panel::Rebuses);
    assert!(!nav.class_modal_open);
}

#[test]
fn home_is_never_gated() {
    let mut nav = NavState { active: Panel::Homework, class_modal_open: false };
    assert_eq!(nav.request(Panel::Home, false, false), NavOutcome::Activated(Panel::Home));
    assert!(!nav.class_modal_open);
}

#[test]
fn gate_scenario_select_class_then_retry() {
    let mut nav = NavState::default();
    let mut selected = String::new();

    assert_eq!(nav.request(Panel::Homework, !selected.is_empty(), false), NavOutcome::ClassRequired);
    assert!(nav.class_modal_open);

    selected.push('1');
    nav.close_class_modal();
    assert!(!nav.class_modal_open);

    assert_eq!(nav.request(Panel::Homework, !selected.is_empty(), false), NavOutcome::Activated(Panel::Homework));
    assert_eq!(nav.active, Panel::Homework);
}

// =============================================================
// Admin
// =============================================================

#[test]
fn admin_request_without_rights_keeps_current_panel() {
    let mut nav = NavState { active: Panel::Schedule, class_modal_open: false };
    assert_eq!(nav.request(Panel::Admin, true, false), NavOutcome::AdminOnly);
    assert_eq!(nav.active, Panel::Schedule);
}

#[test]
fn admin_request_with_rights_needs_no_class() {
    let mut nav = NavState::default();
    assert_eq!(nav.request(Panel::Admin, false, true), NavOutcome::Activated(Panel::Admin));
}

#[test]
fn revoke_admin_leaves_admin_panel() {
    let mut nav = NavState { active: Panel::Admin, class_modal_open: false };
    nav.revoke_admin();
    assert_eq!(nav.active, Panel::Home);

    let mut nav = NavState { active: Panel::Rebuses, class_modal_open: false };
    nav.revoke_admin();
    assert_eq!(nav.active, Panel::Rebuses);
}
