use super::*;

// =============================================================
// push
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let a = state.push(ToastKind::Info, "a", false);
    let b = state.push(ToastKind::Success, "b", false);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_replaces_same_kind_non_persistent() {
    let mut state = NotifyState::default();
    state.push(ToastKind::Success, "first", false);
    state.push(ToastKind::Success, "second", false);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "second");
}

#[test]
fn push_keeps_other_kinds() {
    let mut state = NotifyState::default();
    state.push(ToastKind::Error, "boom", false);
    state.push(ToastKind::Success, "ok", false);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_keeps_persistent_toasts_of_same_kind() {
    let mut state = NotifyState::default();
    state.push(ToastKind::Info, "sticky", true);
    state.push(ToastKind::Info, "transient", false);
    assert_eq!(state.toasts.len(), 2);
    assert!(state.toasts[0].persistent);
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotifyState::default();
    let a = state.push(ToastKind::Info, "a", false);
    state.push(ToastKind::Error, "b", false);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "b");
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotifyState::default();
    state.push(ToastKind::Info, "a", false);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn kind_classes_and_icons() {
    assert_eq!(ToastKind::Success.class_suffix(), "success");
    assert_eq!(ToastKind::Error.icon(), "fa-exclamation-circle");
}
