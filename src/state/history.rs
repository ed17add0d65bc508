//! History modal state: snapshot list, search, and paging.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::config::DEFAULT_TITLE;
use crate::net::types::{HistoryItem, Pagination};

/// What the history list area should show.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryListView {
    Loading,
    Error(String),
    Empty,
    NoResults(String),
    Items(Vec<HistoryItem>),
}

#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    pub open: bool,
    pub view_only: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<HistoryItem>,
    pub search: String,
    pub page: u32,
    pub pagination: Option<Pagination>,
}

impl HistoryState {
    pub fn open(&mut self, view_only: bool) {
        self.open = true;
        self.view_only = view_only;
        self.loading = true;
        self.error = None;
        self.search.clear();
        self.page = 1;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
    }

    /// Store a fetched page, newest first.
    pub fn set_items(&mut self, mut items: Vec<HistoryItem>, pagination: Option<Pagination>) {
        items.sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp));
        self.items = items;
        self.pagination = pagination;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Optimistically drop an item after a confirmed delete.
    pub fn remove(&mut self, timestamp: f64) -> Option<HistoryItem> {
        let index = self.items.iter().position(|i| i.timestamp == timestamp)?;
        Some(self.items.remove(index))
    }

    pub fn filtered(&self) -> Vec<HistoryItem> {
        let needle = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item_title(item).to_lowercase().contains(&needle)
                    || item.date.to_lowercase().contains(&needle)
                    || item.data.date.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn view(&self) -> HistoryListView {
        if self.loading {
            return HistoryListView::Loading;
        }
        if let Some(err) = &self.error {
            return HistoryListView::Error(err.clone());
        }
        if self.items.is_empty() {
            return HistoryListView::Empty;
        }
        let filtered = self.filtered();
        if filtered.is_empty() {
            HistoryListView::NoResults(self.search.trim().to_owned())
        } else {
            HistoryListView::Items(filtered)
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.has_next)
    }

    pub fn has_prev_page(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.has_prev)
    }
}

pub fn item_title(item: &HistoryItem) -> &str {
    if item.title.trim().is_empty() { DEFAULT_TITLE } else { &item.title }
}

pub fn service_count_label(item: &HistoryItem) -> String {
    let n = item.data.services.len();
    if n == 1 { "1 service".to_owned() } else { format!("{n} services") }
}

/// Path segment identifying a snapshot, e.g. `1700000000.123`.
pub fn timestamp_segment(timestamp: f64) -> String {
    timestamp.to_string()
}
