use super::*;

fn user(name: &str, role: &str) -> UserSummary {
    UserSummary { username: name.to_owned(), role: role.to_owned(), ..UserSummary::default() }
}

#[test]
fn set_users_clears_loading_and_error() {
    let mut state = UsersState { loading: true, error: Some("x".to_owned()), ..UsersState::default() };
    state.set_users(vec![user("ana", "user")]);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.users.len(), 1);
}

#[test]
fn remove_and_set_role_target_one_user() {
    let mut state = UsersState::default();
    state.set_users(vec![user("ana", "user"), user("bo", "user")]);
    state.set_role("bo", "admin");
    assert_eq!(state.users[1].role, "admin");
    state.remove("ana");
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].username, "bo");
}

#[test]
fn credentials_require_both_fields() {
    assert_eq!(
        validate_credentials("  ana ", "secret"),
        Ok(Credentials { username: "ana".to_owned(), password: "secret".to_owned() })
    );
    assert!(matches!(validate_credentials("  ", "secret"), Err(ClientError::Validation(_))));
    assert!(matches!(validate_credentials("ana", ""), Err(ClientError::Validation(_))));
}

#[test]
fn new_user_form_uses_same_validation() {
    let mut state = UsersState { new_username: "ana".to_owned(), new_password: "pw".to_owned(), ..UsersState::default() };
    assert!(state.new_user_credentials().is_ok());
    state.clear_form();
    assert!(state.new_user_credentials().is_err());
}

#[test]
fn password_change_checks_confirmation_and_length() {
    assert_eq!(
        validate_password_change("old", "newpass", "newpass"),
        Ok(("old".to_owned(), "newpass".to_owned()))
    );
    assert_eq!(
        validate_password_change("old", "newpass", "other"),
        Err(ClientError::Validation("New passwords do not match".to_owned()))
    );
    assert_eq!(
        validate_password_change("old", "short", "short"),
        Err(ClientError::Validation("Password must be at least 6 characters".to_owned()))
    );
    assert!(validate_password_change("", "newpass", "newpass").is_err());
}
