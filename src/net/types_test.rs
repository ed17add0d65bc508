use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn save_row_request_uses_wire_field_names() {
    let req = SaveRowRequest {
        service: "Payments".to_owned(),
        date: "2025-02-15".to_owned(),
        start_date: "2025-02-15".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "11:00".to_owned(),
        end_date: "2025-02-15".to_owned(),
        comments: "window".to_owned(),
        impact_priority: "high".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["startTime"], "09:00");
    assert_eq!(value["endTime"], "11:00");
    assert_eq!(value["endDate"], "2025-02-15");
    assert_eq!(value["impactPriority"], "high");
    assert_eq!(value["start_date"], "2025-02-15");
}

#[test]
fn service_record_omits_blank_start_date() {
    let record = ServiceRecord { name: "Mail".to_owned(), ..ServiceRecord::default() };
    let value = serde_json::to_value(&record).unwrap();
    assert!(value.get("start_date").is_none());
    assert_eq!(value["name"], "Mail");
}

#[test]
fn ai_context_is_camel_case() {
    let ctx = AiContext {
        page_title: "Change Management".to_owned(),
        original_email: "body".to_owned(),
        ..AiContext::default()
    };
    let value = serde_json::to_value(&ctx).unwrap();
    assert_eq!(value["pageTitle"], "Change Management");
    assert_eq!(value["originalEmail"], "body");
    assert!(value.get("headerTitle").is_some());
}

// =============================================================
// Responses
// =============================================================

#[test]
fn status_response_tolerates_missing_fields() {
    let resp: StatusResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.message, None);

    let resp: StatusResponse = serde_json::from_str(r#"{"status":"error","message":"Invalid passkey"}"#).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.message.as_deref(), Some("Invalid passkey"));
}

#[test]
fn history_response_decodes_paged_shape() {
    let json = r#"{
        "items": [{"timestamp": 1700000000.5, "title": "Weekend", "date": "2025-02-15 10:00:00",
                   "data": {"services": [{"name": "Mail", "priority": "high"}], "date": "2025-02-15"}}],
        "pagination": {"current_page": 1, "per_page": 10, "total_items": 1, "total_pages": 1,
                       "has_next": false, "has_prev": false},
        "is_empty": false
    }"#;
    let (items, pagination) = serde_json::from_str::<HistoryResponse>(json).unwrap().into_parts();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].data.services[0].name, "Mail");
    assert_eq!(pagination.unwrap().total_pages, 1);
}

#[test]
fn history_response_decodes_bare_array() {
    let json = r#"[{"timestamp": 1.0, "title": "A", "date": "2025-01-01 00:00:00", "data": {}}]"#;
    let (items, pagination) = serde_json::from_str::<HistoryResponse>(json).unwrap().into_parts();
    assert_eq!(items.len(), 1);
    assert!(pagination.is_none());
}

#[test]
fn history_response_decodes_search_shape_without_pagination() {
    let json = r#"{"items": [], "is_empty": true}"#;
    let (items, pagination) = serde_json::from_str::<HistoryResponse>(json).unwrap().into_parts();
    assert!(items.is_empty());
    assert!(pagination.is_none());
}

#[test]
fn document_data_reads_initial_page_payload() {
    let json = r#"{"services": [], "date": "2025-02-15", "header_title": "Patch night",
                   "original_body": "hello", "last_modified": 1700000000.25, "last_edited_by": "ana"}"#;
    let doc: DocumentData = serde_json::from_str(json).unwrap();
    assert_eq!(doc.header_title.as_deref(), Some("Patch night"));
    assert_eq!(doc.last_modified, Some(1_700_000_000.25));
    assert_eq!(doc.last_edited_by.as_deref(), Some("ana"));
}

#[test]
fn ai_status_reads_camel_case_payload() {
    let json = r#"{"model": "gemini", "modelAvailable": true, "apiKeyStatus": "valid",
                   "apiKeyConfigured": true, "connectionStatus": "connected", "provider": "Google",
                   "performance": {"responseTime": 0.5, "successRate": 99.0, "requestCount": 4,
                                   "lastRequest": "2025-02-15 10:00:00"}}"#;
    let status: AiStatus = serde_json::from_str(json).unwrap();
    assert!(status.model_available);
    assert_eq!(status.performance.unwrap().request_count, Some(4));
}

#[test]
fn current_user_defaults_to_logged_out() {
    let user: CurrentUser = serde_json::from_str("{}").unwrap();
    assert!(!user.logged_in);
    assert_eq!(user.username, None);
}
