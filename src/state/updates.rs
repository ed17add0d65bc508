//! Remote-update notice state.

#[cfg(test)]
#[path = "updates_test.rs"]
mod updates_test;

use crate::net::types::CheckUpdatesResponse;

pub const UPDATE_NOTICE: &str = "Data has been updated.";
pub const UPDATE_NOTICE_SUFFIX: &str = "to see the latest changes.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateState {
    /// Sticky once set: the page never reloads on its own.
    pub available: bool,
    pub server_timestamp: Option<f64>,
}

impl UpdateState {
    pub fn apply(&mut self, response: &CheckUpdatesResponse) {
        if response.updated {
            self.available = true;
            self.server_timestamp = response.timestamp;
        }
    }

    /// A sync from this page moved our baseline; drop a notice it caused.
    pub fn acknowledge(&mut self) {
        self.available = false;
    }
}

/// Reload target for the refresh link: same path, cache-busting query.
pub fn refresh_url(href: &str, now_ms: i64) -> String {
    let base = href.split(['?', '#']).next().unwrap_or(href);
    format!("{base}?nocache={now_ms}")
}

/// `GET /check-updates` query string.
pub fn check_updates_path(since: f64, now_ms: i64) -> String {
    format!("/check-updates?since={since}&_={now_ms}")
}
