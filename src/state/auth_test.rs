use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_account() {
    let state = AuthState::default();
    assert!(state.account.is_none());
    assert!(!state.loading);
    assert!(!state.is_admin());
    assert_eq!(state.display_name(), "Guest");
}

// =============================================================
// apply_current_user
// =============================================================

#[test]
fn logged_in_user_becomes_account() {
    let mut state = AuthState { loading: true, ..AuthState::default() };
    state.apply_current_user(&CurrentUser {
        logged_in: true,
        username: Some("ana".to_owned()),
        role: Some("admin".to_owned()),
    });
    assert!(!state.loading);
    assert!(state.is_admin());
    assert_eq!(state.display_name(), "ana");
    assert_eq!(state.initial(), "A");
}

#[test]
fn logged_out_user_clears_account() {
    let mut state = AuthState::default();
    state.apply_current_user(&CurrentUser { logged_in: false, username: Some("ana".to_owned()), role: None });
    assert!(state.account.is_none());
}

#[test]
fn missing_role_is_plain_user() {
    let mut state = AuthState::default();
    state.apply_current_user(&CurrentUser { logged_in: true, username: Some("bo".to_owned()), role: None });
    assert_eq!(state.account.unwrap().role, Role::User);
}

#[test]
fn role_parse_round_trips_known_roles() {
    for role in [Role::User, Role::Admin, Role::Guest] {
        assert_eq!(Role::parse(role.as_str()), role);
    }
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse("superuser"), Role::User);
}
