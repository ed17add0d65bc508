use super::*;

#[test]
fn msg_extension_is_case_insensitive() {
    assert!(validate_msg_file("change.msg").is_ok());
    assert!(validate_msg_file("CHANGE.MSG").is_ok());
    assert!(validate_msg_file("Weekend.Msg").is_ok());
}

#[test]
fn other_extensions_are_rejected_before_upload() {
    for name in ["change.eml", "change.msg.txt", "msg", ""] {
        assert_eq!(
            validate_msg_file(name),
            Err(ClientError::Validation(WRONG_EXTENSION_MESSAGE.to_owned())),
            "{name}"
        );
    }
}

#[test]
fn begin_rejects_without_touching_state() {
    let mut state = UploadState::default();
    assert!(state.begin("notes.pdf").is_err());
    assert!(!state.uploading);
    assert!(state.file_name.is_none());
}

#[test]
fn progress_is_fast_then_slows_under_ceiling() {
    assert_eq!(next_progress(0.0), 10.0);
    assert_eq!(next_progress(25.0), 30.0);
    let mut p = 30.0;
    let mut last_step = f64::MAX;
    for _ in 0..200 {
        let next = next_progress(p);
        let step = next - p;
        assert!(step <= last_step);
        last_step = step;
        p = next;
    }
    assert!(p <= 90.0);
    assert!(p > 89.0);
}

#[test]
fn tick_advances_only_while_uploading() {
    let mut state = UploadState::default();
    state.tick();
    assert_eq!(state.progress, 0.0);
    state.begin("a.msg").unwrap();
    state.tick();
    assert_eq!(state.progress, 10.0);
}

#[test]
fn reset_keeps_ai_preference() {
    let mut state = UploadState { use_ai: true, ..UploadState::default() };
    state.begin("a.msg").unwrap();
    state.reset();
    assert!(state.use_ai);
    assert!(!state.uploading);
    assert!(state.file_name.is_none());
}
