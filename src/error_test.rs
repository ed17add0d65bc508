use super::*;

#[test]
fn error_codes_are_distinct_per_variant() {
    let codes = [
        ClientError::Auth(String::new()).error_code(),
        ClientError::Network(String::new()).error_code(),
        ClientError::Validation(String::new()).error_code(),
        ClientError::Server(String::new()).error_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn display_is_the_bare_message() {
    let err = ClientError::Validation("Please upload a .msg file".to_owned());
    assert_eq!(err.to_string(), "Please upload a .msg file");
}

#[test]
fn server_uses_message_when_present() {
    let err = ClientError::server(Some("History entry not found".to_owned()), "fallback");
    assert_eq!(err, ClientError::Server("History entry not found".to_owned()));
}

#[test]
fn server_falls_back_on_missing_or_blank_message() {
    assert_eq!(ClientError::server(None, "Failed"), ClientError::Server("Failed".to_owned()));
    assert_eq!(
        ClientError::server(Some("  ".to_owned()), "Failed"),
        ClientError::Server("Failed".to_owned())
    );
}

#[test]
fn serde_errors_map_to_network() {
    let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert_eq!(err.error_code(), "E_NETWORK");
}
