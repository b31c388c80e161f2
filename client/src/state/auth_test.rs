use super::*;

#[test]
fn default_is_not_admin() {
    let state = AuthState::default();
    assert!(!state.is_admin());
    assert_eq!(state.badge(), "");
    assert!(!state.loading);
}

#[test]
fn loading_state_is_not_admin() {
    let state = AuthState::loading();
    assert!(state.loading);
    assert!(!state.is_admin());
}

#[test]
fn resolve_admin_identity() {
    let mut state = AuthState::loading();
    state.resolve(Ok(Me { is_admin: true, username: Some("head".into()), user_id: Some(9) }));
    assert!(!state.loading);
    assert!(state.is_admin());
    assert_eq!(state.badge(), "@head");
}

#[test]
fn resolve_user_without_username_shows_id() {
    let mut state = AuthState::loading();
    state.resolve(Ok(Me { is_admin: false, username: None, user_id: Some(77) }));
    assert!(!state.is_admin());
    assert_eq!(state.badge(), "77");
}

#[test]
fn failed_check_fails_closed() {
    let mut state = AuthState::loading();
    state.resolve(Ok(Me { is_admin: true, username: None, user_id: None }));
    state.resolve(Err(ApiError::Transport("offline".into())));
    assert!(!state.loading);
    assert!(!state.is_admin());
    assert_eq!(state.me, None);
}
