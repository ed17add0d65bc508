//! Logged-in account state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Separate from the passkey session: the account identifies who is using
//! the page (and whether admin tooling shows), the passkey session decides
//! whether destructive actions may run.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::CurrentUser;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Admin,
    Guest,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "guest" => Self::Guest,
            _ => Self::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Guest => "guest",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub role: Role,
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub account: Option<Account>,
    pub loading: bool,
}

impl AuthState {
    pub fn apply_current_user(&mut self, user: &CurrentUser) {
        self.loading = false;
        self.account = match (&user.username, user.logged_in) {
            (Some(name), true) => Some(Account {
                username: name.clone(),
                role: user.role.as_deref().map(Role::parse).unwrap_or_default(),
            }),
            _ => None,
        };
    }

    pub fn is_admin(&self) -> bool {
        self.account.as_ref().is_some_and(|a| a.role == Role::Admin)
    }

    pub fn display_name(&self) -> String {
        self.account.as_ref().map_or_else(|| "Guest".to_owned(), |a| a.username.clone())
    }

    /// Single-letter avatar for the profile button.
    pub fn initial(&self) -> String {
        self.display_name().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}
