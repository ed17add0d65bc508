use super::*;

// =============================================================
// Transitions
// =============================================================

#[test]
fn default_is_no_changes() {
    let tracker = ChangeTracker::default();
    assert_eq!(tracker.status, SyncStatus::NoChanges);
    assert_eq!(tracker.change_count, 0);
}

#[test]
fn mark_unsaved_counts_each_change() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    tracker.mark_unsaved();
    assert_eq!(tracker.status, SyncStatus::Unsaved);
    assert_eq!(tracker.change_count, 2);
    assert!(tracker.has_unsaved_changes());
}

#[test]
fn syncing_keeps_count() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    tracker.mark_syncing();
    assert_eq!(tracker.status, SyncStatus::Syncing);
    assert_eq!(tracker.change_count, 1);
}

#[test]
fn changes_stay_unsaved_until_sync_succeeds() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    tracker.mark_syncing();
    assert!(tracker.has_unsaved_changes());
    tracker.mark_synced();
    assert!(!tracker.has_unsaved_changes());
}

#[test]
fn synced_resets_count_then_reverts_for_its_generation() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    let generation = tracker.mark_synced();
    assert_eq!(tracker.change_count, 0);
    assert_eq!(tracker.status, SyncStatus::Synced);

    assert!(tracker.revert_synced(generation));
    assert_eq!(tracker.status, SyncStatus::NoChanges);
    assert!(!tracker.revert_synced(generation));
}

#[test]
fn later_transition_cancels_pending_revert() {
    let mut tracker = ChangeTracker::default();
    let generation = tracker.mark_synced();
    tracker.mark_unsaved();
    assert!(!tracker.revert_synced(generation));
    assert_eq!(tracker.status, SyncStatus::Unsaved);
}

#[test]
fn newer_sync_ignores_stale_revert() {
    let mut tracker = ChangeTracker::default();
    let first = tracker.mark_synced();
    let second = tracker.mark_synced();
    assert!(!tracker.revert_synced(first));
    assert_eq!(tracker.status, SyncStatus::Synced);
    assert!(tracker.revert_synced(second));
}

#[test]
fn reset_counter_returns_to_no_changes() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    tracker.reset_counter();
    assert_eq!(tracker.status, SyncStatus::NoChanges);
    assert_eq!(tracker.change_count, 0);
}

#[test]
fn decrement_to_zero_reverts_to_no_changes() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    tracker.mark_unsaved();
    tracker.decrement();
    assert_eq!(tracker.status, SyncStatus::Unsaved);
    tracker.decrement();
    assert_eq!(tracker.status, SyncStatus::NoChanges);
    tracker.decrement();
    assert_eq!(tracker.change_count, 0);
}

// =============================================================
// Sync events
// =============================================================

#[test]
fn sync_events_drive_lifecycle() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    assert_eq!(tracker.apply_sync_event(&SyncEvent::Started), None);
    assert_eq!(tracker.status, SyncStatus::Syncing);
    let generation = tracker.apply_sync_event(&SyncEvent::Succeeded { timestamp: Some(1.0) });
    assert_eq!(tracker.status, SyncStatus::Synced);
    assert_eq!(tracker.change_count, 0);
    assert!(generation.is_some_and(|g| tracker.revert_synced(g)));
    assert_eq!(tracker.status, SyncStatus::NoChanges);
}

#[test]
fn failed_sync_returns_to_unsaved() {
    let mut tracker = ChangeTracker::default();
    tracker.apply_sync_event(&SyncEvent::Started);
    assert_eq!(tracker.apply_sync_event(&SyncEvent::Failed { message: "down".to_owned() }), None);
    assert_eq!(tracker.status, SyncStatus::Unsaved);
    assert_eq!(tracker.change_count, 1);
}

// =============================================================
// Indicator
// =============================================================

#[test]
fn indicator_for_no_changes() {
    let view = ChangeTracker::default().indicator();
    assert_eq!(view.badge, "0");
    assert_eq!(view.title, "No changes");
    assert_eq!(view.stages[0].state, StageState::Active);
    assert_eq!(view.stages[1].state, StageState::Idle);
    assert_eq!(view.stages[2].state, StageState::Idle);
}

#[test]
fn indicator_for_unsaved() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_unsaved();
    tracker.mark_unsaved();
    tracker.mark_unsaved();
    let view = tracker.indicator();
    assert_eq!(view.badge, "3");
    assert_eq!(view.title, "3 change(s) ready to sync");
    assert_eq!(view.stages[1].state, StageState::Active);
}

#[test]
fn indicator_for_syncing_and_synced() {
    let mut tracker = ChangeTracker::default();
    tracker.mark_syncing();
    let view = tracker.indicator();
    assert_eq!(view.title, "Syncing changes...");
    assert_eq!(view.stages[2].state, StageState::Processing);

    tracker.mark_synced();
    let view = tracker.indicator();
    assert_eq!(view.badge, "✓");
    assert_eq!(view.title, "All changes synced");
    assert!(view.stages.iter().all(|s| s.state == StageState::Complete));
}
