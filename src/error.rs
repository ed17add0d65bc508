//! Client error taxonomy and the single reporting path.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the UI can hit maps onto one of four variants. Nothing is
//! fatal: `report` turns any error into an error toast plus a console line,
//! and the caller simply does not apply the failed change.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use leptos::prelude::*;

use crate::state::notify::{NotifyState, ToastKind};

pub const INVALID_PASSKEY_MESSAGE: &str = "Invalid passkey. Please try again.";
pub const PASSKEY_NETWORK_MESSAGE: &str = "Error validating passkey. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Invalid passkey, expired session, or an endpoint that rejected the
    /// caller's login.
    #[error("{0}")]
    Auth(String),
    /// Transport failure or an undecodable response body.
    #[error("{0}")]
    Network(String),
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),
    /// The server answered with a non-success status.
    #[error("{0}")]
    Server(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Auth(_) => "E_AUTH",
            Self::Network(_) => "E_NETWORK",
            Self::Validation(_) => "E_VALIDATION",
            Self::Server(_) => "E_SERVER",
        }
    }

    /// Build a `Server` error from an optional server message.
    pub fn server(message: Option<String>, fallback: &str) -> Self {
        Self::Server(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_owned()),
        )
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Network(format!("invalid response: {err}"))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Log an error and surface it as an error toast.
pub fn report(notify: RwSignal<NotifyState>, err: &ClientError) {
    leptos::logging::warn!("[{}] {err}", err.error_code());
    crate::util::notify::toast(notify, ToastKind::Error, err.to_string());
}

/// Log an error and surface it with a caller-chosen prefix, e.g. "Error syncing data".
pub fn report_with(notify: RwSignal<NotifyState>, context: &str, err: &ClientError) {
    leptos::logging::warn!("[{}] {context}: {err}", err.error_code());
    crate::util::notify::toast(notify, ToastKind::Error, format!("{context}: {err}"));
}
