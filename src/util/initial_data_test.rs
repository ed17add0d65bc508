use super::*;

#[test]
fn blank_payload_is_empty_document() {
    assert_eq!(parse("  "), DocumentData::default());
}

#[test]
fn malformed_payload_is_empty_document() {
    assert_eq!(parse("{not json"), DocumentData::default());
}

#[test]
fn parses_stored_document() {
    let raw = r#"{
        "services": [{"name": "web01", "start_time": "09:00", "end_time": "11:00", "end_date": "2025-02-15", "comments": "", "priority": "high"}],
        "date": "2025-02-15",
        "header_title": "Patch Night",
        "original_body": "hello",
        "last_modified": 1700000000.5,
        "last_edited_by": "alice"
    }"#;
    let data = parse(raw);
    assert_eq!(data.services.len(), 1);
    assert_eq!(data.services[0].name, "web01");
    assert_eq!(data.header_title.as_deref(), Some("Patch Night"));
    assert_eq!(data.last_modified, Some(1_700_000_000.5));
    assert_eq!(data.last_edited_by.as_deref(), Some("alice"));
}
