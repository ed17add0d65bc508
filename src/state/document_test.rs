use super::*;

// =============================================================
// Defaults / apply_data
// =============================================================

#[test]
fn default_title_is_change_weekend() {
    let doc = DocumentState::default();
    assert_eq!(doc.header_title, "Change Weekend");
    assert!(!doc.has_body());
    assert_eq!(doc.body_font_size, 14);
}

#[test]
fn apply_data_adopts_title_and_body() {
    let data = DocumentData {
        header_title: Some("Patch night".to_owned()),
        original_body: Some("Hello team".to_owned()),
        last_edited_by: Some("ana".to_owned()),
        ..DocumentData::default()
    };
    let doc = DocumentState::from_data(&data);
    assert_eq!(doc.header_title, "Patch night");
    assert_eq!(doc.original_body, "Hello team");
    assert_eq!(doc.last_edited_by.as_deref(), Some("ana"));
    assert!(doc.has_body());
}

#[test]
fn apply_data_keeps_title_when_blank() {
    let data = DocumentData { header_title: Some("  ".to_owned()), ..DocumentData::default() };
    assert_eq!(DocumentState::from_data(&data).header_title, "Change Weekend");
}

// =============================================================
// Title editing
// =============================================================

#[test]
fn commit_title_reports_changes_only() {
    let mut doc = DocumentState::default();
    doc.begin_title_edit();
    assert_eq!(doc.commit_title(), None);

    doc.begin_title_edit();
    doc.set_title_draft("  Spring release ".to_owned());
    assert_eq!(doc.commit_title(), Some("Spring release".to_owned()));
    assert_eq!(doc.header_title, "Spring release");
    assert!(doc.title_draft.is_none());
}

#[test]
fn blank_title_is_rejected() {
    let mut doc = DocumentState::default();
    doc.begin_title_edit();
    doc.set_title_draft(String::new());
    assert_eq!(doc.commit_title(), None);
    assert_eq!(doc.header_title, "Change Weekend");
}

#[test]
fn cancel_title_edit_discards_draft() {
    let mut doc = DocumentState::default();
    doc.begin_title_edit();
    doc.set_title_draft("Other".to_owned());
    doc.cancel_title_edit();
    assert_eq!(doc.header_title, "Change Weekend");
    assert_eq!(doc.commit_title(), None);
}

#[test]
fn draft_ignored_when_not_editing() {
    let mut doc = DocumentState::default();
    doc.set_title_draft("Other".to_owned());
    assert!(doc.title_draft.is_none());
}

// =============================================================
// Viewer controls
// =============================================================

#[test]
fn font_size_is_clamped_between_ten_and_twenty_four() {
    let mut doc = DocumentState::default();
    for _ in 0..10 {
        doc.increase_font();
    }
    assert_eq!(doc.body_font_size, 24);
    for _ in 0..10 {
        doc.decrease_font();
    }
    assert_eq!(doc.body_font_size, 10);
}

#[test]
fn comparison_heading_names_source() {
    let mut doc = DocumentState::default();
    assert_eq!(doc.comparison_heading(), "Current table");
    doc.set_comparison(Vec::new(), ComparisonSource::History { title: "Week 7".to_owned() });
    assert_eq!(doc.comparison_heading(), "History: Week 7");
}
