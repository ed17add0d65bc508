use super::*;

#[test]
fn not_updated_leaves_notice_hidden() {
    let mut state = UpdateState::default();
    state.apply(&CheckUpdatesResponse { updated: false, timestamp: Some(5.0) });
    assert!(!state.available);
    assert_eq!(state.server_timestamp, None);
}

#[test]
fn updated_shows_notice_and_stays() {
    let mut state = UpdateState::default();
    state.apply(&CheckUpdatesResponse { updated: true, timestamp: Some(5.0) });
    assert!(state.available);
    state.apply(&CheckUpdatesResponse { updated: false, timestamp: Some(6.0) });
    assert!(state.available);
    assert_eq!(state.server_timestamp, Some(5.0));
}

#[test]
fn acknowledge_hides_notice() {
    let mut state = UpdateState { available: true, server_timestamp: None };
    state.acknowledge();
    assert!(!state.available);
}

#[test]
fn refresh_url_replaces_query_and_fragment() {
    assert_eq!(refresh_url("https://host/?nocache=1#top", 42), "https://host/?nocache=42");
    assert_eq!(refresh_url("https://host/changes", 7), "https://host/changes?nocache=7");
}

#[test]
fn check_updates_path_carries_since_and_buster() {
    assert_eq!(check_updates_path(1_700_000_000.5, 9), "/check-updates?since=1700000000.5&_=9");
}
