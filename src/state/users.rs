//! Admin user-management panel state.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::error::{ClientError, ClientResult};
use crate::net::types::{Credentials, UserSummary};

#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub users: Vec<UserSummary>,
    pub loading: bool,
    pub error: Option<String>,
    /// Admin panel expanded; persisted as `userActionsVisible`.
    pub panel_visible: bool,
    pub signup_enabled: bool,
    pub guest_enabled: bool,
    pub new_username: String,
    pub new_password: String,
}

impl UsersState {
    pub fn set_users(&mut self, users: Vec<UserSummary>) {
        self.users = users;
        self.loading = false;
        self.error = None;
    }

    pub fn remove(&mut self, username: &str) {
        self.users.retain(|u| u.username != username);
    }

    pub fn set_role(&mut self, username: &str, role: &str) {
        if let Some(user) = self.users.iter_mut().find(|u| u.username == username) {
            role.clone_into(&mut user.role);
        }
    }

    /// Validate the add-user form.
    ///
    /// # Errors
    ///
    /// Returns a validation error when either field is blank.
    pub fn new_user_credentials(&self) -> ClientResult<Credentials> {
        validate_credentials(&self.new_username, &self.new_password)
    }

    pub fn clear_form(&mut self) {
        self.new_username.clear();
        self.new_password.clear();
    }
}

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns `ClientError::Validation` when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> ClientResult<Credentials> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ClientError::Validation("Username and password required".to_owned()));
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Validate the change-password form.
///
/// # Errors
///
/// Returns `ClientError::Validation` for blank fields or a mismatched confirmation.
pub fn validate_password_change(old: &str, new: &str, confirm: &str) -> ClientResult<(String, String)> {
    if old.is_empty() || new.is_empty() {
        return Err(ClientError::Validation("Please fill in all password fields".to_owned()));
    }
    if new != confirm {
        return Err(ClientError::Validation("New passwords do not match".to_owned()));
    }
    if new.chars().count() < 6 {
        return Err(ClientError::Validation("Password must be at least 6 characters".to_owned()));
    }
    Ok((old.to_owned(), new.to_owned()))
}
