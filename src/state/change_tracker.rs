//! Local change tracking and the three-stage sync indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Table edits, deletes, priority and title changes call into the tracker.
//! Sync progress arrives as `SyncEvent`s published by the sync util; the
//! tracker never wraps the sync call itself.
//!
//! DESIGN
//! ======
//! `Synced` is transient. Each `mark_synced` starts a new sync generation,
//! and the page timer calls `revert_synced(generation)` after
//! `SYNCED_REVERT_MS`. A later transition (or a newer sync) invalidates the
//! generation, so a stale timer is a no-op without cancellation bookkeeping.

#[cfg(test)]
#[path = "change_tracker_test.rs"]
mod change_tracker_test;

use crate::state::sync::SyncEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    NoChanges,
    Unsaved,
    Syncing,
    Synced,
}

impl SyncStatus {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::NoChanges => "no-changes",
            Self::Unsaved => "unsaved",
            Self::Syncing => "syncing",
            Self::Synced => "synced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageState {
    Idle,
    Active,
    Processing,
    Complete,
}

impl StageState {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Processing => "processing",
            Self::Complete => "complete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageView {
    pub label: &'static str,
    pub icon: &'static str,
    pub state: StageState,
}

/// Everything the indicator component needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorView {
    pub status: SyncStatus,
    pub stages: [StageView; 3],
    pub badge: String,
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    pub status: SyncStatus,
    pub change_count: u32,
    /// Generation of the `Synced` state awaiting its revert, if any.
    pending_revert: Option<u64>,
    sync_generation: u64,
}

impl ChangeTracker {
    pub fn mark_unsaved(&mut self) {
        self.status = SyncStatus::Unsaved;
        self.change_count += 1;
        self.pending_revert = None;
    }

    pub fn mark_syncing(&mut self) {
        self.status = SyncStatus::Syncing;
        self.pending_revert = None;
    }

    /// Enter `Synced` and return the generation to pass to `revert_synced`.
    pub fn mark_synced(&mut self) -> u64 {
        self.status = SyncStatus::Synced;
        self.change_count = 0;
        self.sync_generation += 1;
        self.pending_revert = Some(self.sync_generation);
        self.sync_generation
    }

    pub fn reset_counter(&mut self) {
        self.status = SyncStatus::NoChanges;
        self.change_count = 0;
        self.pending_revert = None;
    }

    /// Undo one pending change (an empty row was discarded).
    pub fn decrement(&mut self) {
        if self.change_count == 0 {
            return;
        }
        self.change_count -= 1;
        if self.change_count == 0 {
            self.status = SyncStatus::NoChanges;
        }
    }

    /// Revert `Synced` to `NoChanges` when `generation` is still the
    /// current one. Returns `true` on transition.
    pub fn revert_synced(&mut self, generation: u64) -> bool {
        if self.status == SyncStatus::Synced && self.pending_revert == Some(generation) {
            self.status = SyncStatus::NoChanges;
            self.pending_revert = None;
            return true;
        }
        false
    }

    /// Apply a sync lifecycle event. Returns the revert generation on success.
    pub fn apply_sync_event(&mut self, event: &SyncEvent) -> Option<u64> {
        match event {
            SyncEvent::Started => self.mark_syncing(),
            SyncEvent::Succeeded { .. } => return Some(self.mark_synced()),
            SyncEvent::Failed { .. } => {
                // Failure restores the unsaved state without counting a new edit.
                self.status = SyncStatus::Unsaved;
                self.change_count = self.change_count.max(1);
                self.pending_revert = None;
            }
        }
        None
    }

    /// Edits not yet confirmed by the server, including a sync in flight.
    pub fn has_unsaved_changes(&self) -> bool {
        matches!(self.status, SyncStatus::Unsaved | SyncStatus::Syncing)
    }

    pub fn indicator(&self) -> IndicatorView {
        use StageState::{Active, Complete, Idle, Processing};

        let (local, staged, synced) = match self.status {
            SyncStatus::NoChanges => (Active, Idle, Idle),
            SyncStatus::Unsaved => (Active, Active, Idle),
            SyncStatus::Syncing => (Complete, Complete, Processing),
            SyncStatus::Synced => (Complete, Complete, Complete),
        };
        let badge = match self.status {
            SyncStatus::Synced => "✓".to_owned(),
            _ => self.change_count.to_string(),
        };
        let title = match self.status {
            SyncStatus::NoChanges => "No changes".to_owned(),
            SyncStatus::Unsaved => format!("{} change(s) ready to sync", self.change_count),
            SyncStatus::Syncing => "Syncing changes...".to_owned(),
            SyncStatus::Synced => "All changes synced".to_owned(),
        };

        IndicatorView {
            status: self.status,
            stages: [
                StageView { label: "Local", icon: "fa-laptop", state: local },
                StageView { label: "Staged", icon: "fa-layer-group", state: staged },
                StageView { label: "Synced", icon: "fa-cloud", state: synced },
            ],
            badge,
            title,
        }
    }
}
