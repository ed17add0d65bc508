//! Sync lifecycle events and the shared last-synced timestamp.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::sync::sync_all_data` publishes `SyncEvent`s here. The change
//! tracker and the update poller subscribe through an `Effect` on this
//! signal instead of wrapping the sync call.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use crate::net::types::SyncRequest;
use crate::state::document::DocumentState;
use crate::state::table::TableState;

#[derive(Clone, Debug, PartialEq)]
pub enum SyncEvent {
    Started,
    Succeeded { timestamp: Option<f64> },
    Failed { message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncTarget {
    /// Replace the stored document only.
    Data,
    /// Replace the stored document and append a history snapshot.
    History,
}

impl SyncTarget {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Data => "/sync-all-data",
            Self::History => "/sync-to-history",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Data => "Data synced successfully!",
            Self::History => "Data synced and saved to history!",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncState {
    /// Server `last_modified` of the document this page shows, in seconds.
    pub data_timestamp: f64,
    pub in_flight: bool,
    /// Bumped on every published event so subscribers see repeats.
    pub event_seq: u64,
    pub last_event: Option<SyncEvent>,
}

impl SyncState {
    pub fn new(data_timestamp: f64) -> Self {
        Self { data_timestamp, ..Self::default() }
    }

    pub fn publish(&mut self, event: SyncEvent) {
        match &event {
            SyncEvent::Started => self.in_flight = true,
            SyncEvent::Succeeded { timestamp } => {
                self.in_flight = false;
                if let Some(ts) = timestamp {
                    self.data_timestamp = *ts;
                }
            }
            SyncEvent::Failed { .. } => self.in_flight = false,
        }
        self.event_seq += 1;
        self.last_event = Some(event);
    }

    /// Adopt a newer server timestamp, such as the one a reset returns.
    pub fn observe_timestamp(&mut self, timestamp: f64) {
        if timestamp > self.data_timestamp {
            self.data_timestamp = timestamp;
        }
    }
}

/// Build the sync body, or `None` when the table has no rows.
pub fn build_sync_request(table: &TableState, document: &DocumentState, today: &str) -> Option<SyncRequest> {
    if table.is_empty() {
        return None;
    }
    let services = table.records();
    let date = services
        .first()
        .map(|s| s.end_date.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| today.to_owned());
    Some(SyncRequest {
        services,
        date,
        header_title: document.header_title.clone(),
        original_body: document.original_body.clone(),
    })
}
