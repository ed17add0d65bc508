//! REST API helpers for communicating with the change-management server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side and native tests: stubs returning a `Network` error or `None`,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `ClientResult`. Transport and decode failures become
//! `ClientError::Network`; a `{status: "error"}` body becomes
//! `ClientError::Server` with the server message, or `ClientError::Auth` when
//! the server answered 401/403. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::{ClientError, ClientResult};
use crate::state::sync::SyncTarget;

use super::types::{
    AiStatus, AskAiRequest, CheckUpdatesResponse, Credentials, CurrentUser, DocumentData, LoginResponse, Pagination,
    HistoryItem, SaveRowRequest, SyncRequest, UserSummary,
};
#[cfg(feature = "hydrate")]
use super::types::{
    AskAiResponse, ChangePasswordRequest, DeleteRowRequest, EnabledResponse, HistoryResponse, LoadHistoryResponse,
    RoleUpdateRequest, SaveTitleRequest, StatusResponse, UserListResponse, UsernameRequest,
};

pub const HISTORY_PAGE_SIZE: u32 = 10;
pub const EXISTING_USER_MATCH: &str = "existing_user_match";

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> ClientResult<T> {
    Err(ClientError::Network("not available on server".to_owned()))
}

/// Map a non-success response onto the error taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(code: u16, message: Option<String>, fallback: &str) -> ClientError {
    let message = message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_owned());
    if code == 401 || code == 403 { ClientError::Auth(message) } else { ClientError::Server(message) }
}

#[cfg(any(test, feature = "hydrate"))]
fn history_item_endpoint(action: &str, timestamp: f64) -> String {
    format!("/{action}/{}", crate::state::history::timestamp_segment(timestamp))
}

#[cfg(any(test, feature = "hydrate"))]
fn history_page_endpoint(page: u32, per_page: u32) -> String {
    format!("/get-history?page={page}&per_page={per_page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ai_answer(status: &str, response: Option<String>, message: Option<String>) -> ClientResult<String> {
    match (status, response) {
        ("success", Some(answer)) => Ok(answer),
        _ => Err(ClientError::server(message, "Sorry, I could not process your question.")),
    }
}

#[cfg(feature = "hydrate")]
async fn read_status(resp: gloo_net::http::Response, fallback: &str) -> ClientResult<StatusResponse> {
    let code = resp.status();
    let body: StatusResponse = match resp.json().await {
        Ok(body) => body,
        Err(_) if resp.ok() => return Err(ClientError::Network(format!("{fallback}: unreadable response"))),
        Err(_) => StatusResponse::default(),
    };
    if resp.ok() && body.is_success() {
        Ok(body)
    } else {
        Err(status_error(code, body.message, fallback))
    }
}

#[cfg(feature = "hydrate")]
async fn post_status<B: serde::Serialize>(url: &str, body: &B, fallback: &str) -> ClientResult<StatusResponse> {
    let resp = gloo_net::http::Request::post(url).json(body)?.send().await?;
    read_status(resp, fallback).await
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> ClientResult<T> {
    let resp = gloo_net::http::Request::get(url).send().await?;
    if !resp.ok() {
        return Err(status_error(resp.status(), None, &format!("request failed: {}", resp.status())));
    }
    Ok(resp.json::<T>().await?)
}

// =============================================================================
// SESSION GATE
// =============================================================================

/// Validate a passkey via `POST /validate-passkey`.
///
/// # Errors
///
/// `Auth` with the server message for a rejected passkey, `Network` when the
/// server could not be reached.
pub async fn validate_passkey(passkey: &str) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "passkey": passkey });
        let resp = gloo_net::http::Request::post("/validate-passkey").json(&payload)?.send().await?;
        match read_status(resp, crate::error::INVALID_PASSKEY_MESSAGE).await {
            Ok(_) => Ok(()),
            Err(ClientError::Server(message) | ClientError::Auth(message)) => Err(ClientError::Auth(message)),
            Err(other) => Err(other),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = passkey;
        unavailable()
    }
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Log in via `POST /login`.
///
/// # Errors
///
/// Returns the server message (or "Login failed.") on rejection.
pub async fn login(credentials: &Credentials) -> ClientResult<LoginResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/login").json(credentials)?.send().await?;
        let code = resp.status();
        let body: LoginResponse = resp.json().await.unwrap_or_default();
        if resp.ok() && body.status == "success" {
            Ok(body)
        } else {
            Err(status_error(code, body.message, "Login failed."))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        unavailable()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    /// The credentials already match an account; the user should log in.
    ExistingAccount,
}

/// Create an account via `POST /signup`.
///
/// # Errors
///
/// Returns the server message (or "Signup failed.") on rejection.
pub async fn signup(credentials: &Credentials) -> ClientResult<SignupOutcome> {
    #[cfg(feature = "hydrate")]
    {
        match post_status("/signup", credentials, "Signup failed.").await {
            Ok(_) => Ok(SignupOutcome::Created),
            Err(ClientError::Server(message)) if message == EXISTING_USER_MATCH => Ok(SignupOutcome::ExistingAccount),
            Err(err) => Err(err),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        unavailable()
    }
}

/// Start a guest session via `POST /guest-login`.
///
/// # Errors
///
/// Returns the server message when guest access is disabled or fails.
pub async fn guest_login() -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        post_status("/guest-login", &serde_json::json!({}), "Failed to start guest session").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Log out the current user by calling `POST /logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/logout").send().await;
    }
}

/// Fetch the logged-in account from `/current-user`.
/// Returns `None` if the request fails or on the server.
pub async fn fetch_current_user() -> Option<CurrentUser> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<CurrentUser>("/current-user").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Change the caller's password via `POST /change-password`.
///
/// # Errors
///
/// Returns the server message (e.g. "Old password incorrect").
pub async fn change_password(old_password: &str, new_password: &str) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChangePasswordRequest { old_password: old_password.to_owned(), new_password: new_password.to_owned() };
        post_status("/change-password", &body, "Failed to change password").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (old_password, new_password);
        unavailable()
    }
}

/// Read a `{enabled}` feature flag such as `/signup-enabled`.
///
/// # Errors
///
/// Returns a network error when the flag cannot be fetched.
pub async fn fetch_flag(path: &str) -> ClientResult<bool> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<EnabledResponse>(path).await.map(|r| r.enabled)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        unavailable()
    }
}

/// Flip an admin feature flag such as `/toggle-signup`; returns the new value.
///
/// # Errors
///
/// Returns `Auth` for non-admins and `Server` on failure.
pub async fn toggle_flag(path: &str) -> ClientResult<bool> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_status(path, &serde_json::json!({}), "Failed to update setting").await?;
        Ok(body.enabled.unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        unavailable()
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// List managed users from `GET /users`.
///
/// # Errors
///
/// Returns `Auth` for non-admins.
pub async fn list_users() -> ClientResult<Vec<UserSummary>> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<UserListResponse>("/users").await.map(|r| r.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Create a user via `POST /users`.
///
/// # Errors
///
/// Returns the server message (e.g. "User already exists").
pub async fn add_user(credentials: &Credentials) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        post_status("/users", credentials, "Failed to add user").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        unavailable()
    }
}

/// Reset a user's password via `PUT /users`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn update_user_password(credentials: &Credentials) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/users").json(credentials)?.send().await?;
        read_status(resp, "Failed to update user").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        unavailable()
    }
}

/// Delete a user via `DELETE /users`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn delete_user(username: &str) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let body = UsernameRequest { username: username.to_owned() };
        let resp = gloo_net::http::Request::delete("/users").json(&body)?.send().await?;
        read_status(resp, "Failed to delete user").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        unavailable()
    }
}

/// Change a user's role via `POST /update-user-role`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn update_user_role(username: &str, role: &str) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let body = RoleUpdateRequest { username: username.to_owned(), role: role.to_owned() };
        post_status("/update-user-role", &body, "Failed to update role").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, role);
        unavailable()
    }
}

/// Force-logout a user via `POST /admin-logout-user`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn admin_logout_user(username: &str) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let body = UsernameRequest { username: username.to_owned() };
        post_status("/admin-logout-user", &body, "Failed to log out user").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        unavailable()
    }
}

// =============================================================================
// TABLE / DOCUMENT
// =============================================================================

/// Persist one row via `POST /save-changes`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn save_row(request: &SaveRowRequest) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        post_status("/save-changes", request, "Error saving changes").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}

/// Remove a row by service name via `POST /delete-row`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn delete_row(service: &str) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let body = DeleteRowRequest { service: service.to_owned() };
        post_status("/delete-row", &body, "Error deleting row").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service;
        unavailable()
    }
}

/// Persist the header title via `POST /save-title`.
///
/// # Errors
///
/// Returns a network error when the request fails.
pub async fn save_title(title: &str) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let body = SaveTitleRequest { title: title.to_owned() };
        let resp = gloo_net::http::Request::post("/save-title").json(&body)?.send().await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(status_error(resp.status(), None, "Error saving title"))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
        unavailable()
    }
}

/// Clear the stored document via `POST /reset-data`. Returns the new
/// server timestamp.
///
/// # Errors
///
/// `Auth` when re-authentication is required, `Server` otherwise.
pub async fn reset_data() -> ClientResult<Option<f64>> {
    #[cfg(feature = "hydrate")]
    {
        post_status("/reset-data", &serde_json::json!({}), "Error resetting data").await.map(|r| r.timestamp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Push the whole table via `/sync-all-data` or `/sync-to-history`.
/// Returns the new server timestamp.
///
/// # Errors
///
/// `Auth` when re-authentication is required, `Server` otherwise.
pub async fn sync(target: SyncTarget, request: &SyncRequest) -> ClientResult<Option<f64>> {
    #[cfg(feature = "hydrate")]
    {
        post_status(target.endpoint(), request, "Unknown error").await.map(|r| r.timestamp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, request);
        unavailable()
    }
}

// =============================================================================
// HISTORY
// =============================================================================

/// Fetch one page of snapshots from `GET /get-history`.
///
/// # Errors
///
/// Returns a network error when the list cannot be fetched.
pub async fn fetch_history(page: u32) -> ClientResult<(Vec<HistoryItem>, Option<Pagination>)> {
    #[cfg(feature = "hydrate")]
    {
        let url = history_page_endpoint(page, HISTORY_PAGE_SIZE);
        get_json::<HistoryResponse>(&url).await.map(HistoryResponse::into_parts)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        unavailable()
    }
}

/// Load one snapshot via `GET /load-from-history/:ts`.
///
/// # Errors
///
/// Returns the server message (e.g. "History entry not found").
pub async fn load_history(timestamp: f64) -> ClientResult<DocumentData> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json::<LoadHistoryResponse>(&history_item_endpoint("load-from-history", timestamp)).await?;
        match (body.status.as_str(), body.data) {
            ("success", Some(data)) => Ok(data),
            _ => Err(ClientError::server(body.message, "Failed to load history item")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp;
        unavailable()
    }
}

/// Delete one snapshot via `DELETE /delete-from-history/:ts`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn delete_history(timestamp: f64) -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let url = history_item_endpoint("delete-from-history", timestamp);
        let resp = gloo_net::http::Request::delete(&url).send().await?;
        read_status(resp, "Failed to delete history item").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp;
        unavailable()
    }
}

/// Ask whether the stored document moved past `since`.
///
/// # Errors
///
/// Returns a network error when the check fails.
pub async fn check_updates(since: f64) -> ClientResult<CheckUpdatesResponse> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::state::updates::check_updates_path(since, crate::util::clock::now_ms());
        get_json::<CheckUpdatesResponse>(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = since;
        unavailable()
    }
}

// =============================================================================
// AI
// =============================================================================

/// Ask the assistant via `POST /ask-ai`; returns markdown.
///
/// # Errors
///
/// Returns the server message (e.g. "AI service is not configured").
pub async fn ask_ai(request: &AskAiRequest) -> ClientResult<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/ask-ai").json(request)?.send().await?;
        let body: AskAiResponse = resp.json().await?;
        ai_answer(&body.status, body.response, body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}

/// Fetch assistant health from `GET /ai-status`.
///
/// # Errors
///
/// Returns a network error when the status cannot be fetched.
pub async fn ai_status() -> ClientResult<AiStatus> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<AiStatus>("/ai-status").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Reset assistant performance counters via `POST /clear-ai-stats`.
///
/// # Errors
///
/// Returns the server message on failure.
pub async fn clear_ai_stats() -> ClientResult<()> {
    #[cfg(feature = "hydrate")]
    {
        post_status("/clear-ai-stats", &serde_json::json!({}), "Failed to clear AI stats").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}
