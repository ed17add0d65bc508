use super::*;

fn passkey(message: &str) -> DialogKind {
    DialogKind::Passkey(PasskeyPrompt { message: message.to_owned(), ..PasskeyPrompt::default() })
}

// =============================================================
// ConfirmOptions
// =============================================================

#[test]
fn confirm_defaults() {
    let opts = ConfirmOptions::default();
    assert_eq!(opts.tone, DialogTone::Info);
    assert_eq!(opts.icon, "fa-question-circle");
    assert_eq!(opts.title, "Confirm");
    assert_eq!(opts.message, "Are you sure?");
    assert_eq!(opts.confirm_text, "Confirm");
    assert_eq!(opts.cancel_text, "Cancel");
}

#[test]
fn delete_row_preset() {
    let opts = ConfirmOptions::delete_row();
    assert_eq!(opts.tone, DialogTone::Danger);
    assert_eq!(opts.icon, "fa-trash");
    assert_eq!(opts.title, "Delete Row");
    assert_eq!(opts.confirm_text, "Delete");
    assert_eq!(opts.cancel_text, "Cancel");
}

#[test]
fn load_history_preset_is_primary() {
    assert_eq!(ConfirmOptions::load_history(false).tone, DialogTone::Primary);
    assert_ne!(ConfirmOptions::load_history(true).message, ConfirmOptions::load_history(false).message);
}

// =============================================================
// Single active dialog
// =============================================================

#[test]
fn opening_supersedes_previous() {
    let mut state = DialogState::default();
    let (first, none) = state.open(DialogKind::Confirm(ConfirmOptions::default()));
    assert_eq!(none, None);
    let (second, superseded) = state.open(passkey("x"));
    assert_eq!(superseded, Some(first));
    assert_eq!(state.active.as_ref().map(|d| d.id), Some(second));
}

#[test]
fn close_ignores_stale_ids() {
    let mut state = DialogState::default();
    let (first, _) = state.open(DialogKind::Confirm(ConfirmOptions::default()));
    let (second, _) = state.open(DialogKind::Confirm(ConfirmOptions::default()));
    assert!(!state.close(first));
    assert_eq!(state.active.as_ref().map(|d| d.id), Some(second));
    assert!(state.close(second));
    assert!(state.active.is_none());
}

// =============================================================
// Passkey prompt
// =============================================================

#[test]
fn reject_passkey_keeps_open_with_error_and_clears_input() {
    let mut state = DialogState::default();
    let (id, _) = state.open(passkey("Please enter the passkey to add a new row"));
    state.set_passkey_input(id, "wrong".to_owned());
    state.set_passkey_busy(id, true);
    state.reject_passkey(id, "Invalid passkey. Please try again.".to_owned());

    let (active, prompt) = state.passkey().unwrap();
    assert_eq!(active, id);
    assert_eq!(prompt.input, "");
    assert_eq!(prompt.error.as_deref(), Some("Invalid passkey. Please try again."));
    assert!(!prompt.busy);
}

#[test]
fn passkey_updates_ignore_confirm_dialogs() {
    let mut state = DialogState::default();
    let (id, _) = state.open(DialogKind::Confirm(ConfirmOptions::default()));
    state.set_passkey_input(id, "x".to_owned());
    assert!(state.passkey().is_none());
    assert_eq!(state.active.unwrap().kind, DialogKind::Confirm(ConfirmOptions::default()));
}

#[test]
fn delete_user_names_the_account() {
    let opts = ConfirmOptions::delete_user("ana");
    assert_eq!(opts.tone, DialogTone::Danger);
    assert!(opts.message.contains("\"ana\""));
    assert_eq!(opts.cancel_text, "Cancel");
}
