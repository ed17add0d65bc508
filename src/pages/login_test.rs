use super::*;

#[test]
fn network_errors_use_generic_message() {
    let err = ClientError::Network("fetch failed".to_owned());
    assert_eq!(error_message(&err), NETWORK_ERROR_MESSAGE);
}

#[test]
fn server_errors_pass_message_through() {
    let err = ClientError::Server("Invalid username or password".to_owned());
    assert_eq!(error_message(&err), "Invalid username or password");
}

#[test]
fn created_signup_succeeds_and_switches() {
    let (feedback, switch) = signup_feedback(&Ok(SignupOutcome::Created));
    assert_eq!(feedback, Ok(SIGNUP_SUCCESS_MESSAGE.to_owned()));
    assert!(switch);
}

#[test]
fn existing_account_asks_to_log_in() {
    let (feedback, switch) = signup_feedback(&Ok(SignupOutcome::ExistingAccount));
    assert_eq!(feedback, Err(EXISTING_ACCOUNT_MESSAGE.to_owned()));
    assert!(switch);
}

#[test]
fn failed_signup_stays_in_signup_mode() {
    let (feedback, switch) = signup_feedback(&Err(ClientError::Server("Username taken".to_owned())));
    assert_eq!(feedback, Err("Username taken".to_owned()));
    assert!(!switch);
}

#[test]
fn mode_labels() {
    assert_eq!(LoginMode::Login.title(), "Login");
    assert_eq!(LoginMode::Signup.switch_prompt(), "Already have an account? Log in");
}
