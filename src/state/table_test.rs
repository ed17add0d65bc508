use super::*;

fn record(name: &str, priority: &str) -> ServiceRecord {
    ServiceRecord {
        name: name.to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "11:00".to_owned(),
        end_date: "2025-02-15".to_owned(),
        comments: String::new(),
        priority: priority.to_owned(),
        ..ServiceRecord::default()
    }
}

fn table_of(names: &[(&str, &str)]) -> TableState {
    let records: Vec<ServiceRecord> = names.iter().map(|(n, p)| record(n, p)).collect();
    TableState::from_records(&records, "2025-02-15")
}

fn names(table: &TableState) -> Vec<String> {
    table.rows.iter().map(|r| r.cells.service.clone()).collect()
}

// =============================================================
// Empty-row detection
// =============================================================

#[test]
fn blank_like_cells_make_an_empty_row() {
    let mut row = Row::default();
    assert!(is_empty_row(&row));
    row.cells.service = " - ".to_owned();
    row.cells.date = "–".to_owned();
    row.cells.start_time = "N/A".to_owned();
    row.cells.end_time = "n/a".to_owned();
    row.cells.end_date = "N/a".to_owned();
    row.cells.comments = "   ".to_owned();
    assert!(is_empty_row(&row));
}

#[test]
fn any_content_makes_row_non_empty() {
    let mut row = Row::default();
    row.cells.comments = "x".to_owned();
    assert!(!is_empty_row(&row));
}

#[test]
fn added_row_is_empty_until_typed_into() {
    let mut table = TableState::default();
    let id = table.add_row();
    assert!(is_empty_row(table.row(id).unwrap()));

    table.set_cell(id, Column::Service, "Mail".to_owned());
    assert!(!is_empty_row(table.row(id).unwrap()));
}

// =============================================================
// add / edit / save
// =============================================================

#[test]
fn add_row_appends_editable_low_priority_row() {
    let mut table = TableState::default();
    assert!(table.is_empty());
    let id = table.add_row();
    let row = table.row(id).unwrap();
    assert_eq!(row.priority, Priority::Low);
    assert!(row.is_new);
    assert!(row.is_editing());
    assert!(!table.is_empty());
}

#[test]
fn saving_unchanged_row_reports_no_change() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.rows[0].id;
    assert!(table.begin_edit(id));
    let outcome = table.save_row(id).unwrap();
    assert!(!outcome.changed);
    assert!(!outcome.was_new);
    assert!(!table.row(id).unwrap().is_editing());
}

#[test]
fn saving_edited_row_reports_change_and_trims() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.rows[0].id;
    table.begin_edit(id);
    table.set_cell(id, Column::Comments, "  patch  ".to_owned());
    let outcome = table.save_row(id).unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.request.comments, "patch");
    assert_eq!(outcome.request.impact_priority, "high");
    assert_eq!(table.row(id).unwrap().cells.comments, "patch");
}

#[test]
fn whitespace_only_edit_is_not_a_change() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.rows[0].id;
    table.begin_edit(id);
    table.set_cell(id, Column::Service, "Mail  ".to_owned());
    assert!(!table.save_row(id).unwrap().changed);
}

#[test]
fn saving_new_row_reports_was_new_once() {
    let mut table = TableState::default();
    let id = table.add_row();
    table.set_cell(id, Column::Service, "DNS".to_owned());
    let outcome = table.save_row(id).unwrap();
    assert!(outcome.changed);
    assert!(outcome.was_new);

    table.begin_edit(id);
    table.set_cell(id, Column::Service, "DNS2".to_owned());
    assert!(!table.save_row(id).unwrap().was_new);
}

#[test]
fn saving_empty_new_row_is_not_a_change() {
    let mut table = TableState::default();
    let id = table.add_row();
    assert!(!table.save_row(id).unwrap().changed);
}

#[test]
fn save_without_edit_session_is_none() {
    let mut table = table_of(&[("Mail", "high")]);
    assert!(table.save_row(table.rows[0].id).is_none());
}

#[test]
fn set_cell_is_ignored_outside_edit_mode() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.rows[0].id;
    table.set_cell(id, Column::Service, "Other".to_owned());
    assert_eq!(table.row(id).unwrap().cells.service, "Mail");
}

#[test]
fn cancel_edit_restores_cells_and_priority() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.rows[0].id;
    table.begin_edit(id);
    table.set_cell(id, Column::Service, "Changed".to_owned());
    table.set_priority(id, Priority::Low);
    assert!(table.cancel_edit(id));
    let row = table.row(id).unwrap();
    assert_eq!(row.cells.service, "Mail");
    assert_eq!(row.priority, Priority::High);
    assert!(!row.is_editing());
}

#[test]
fn cancel_edit_on_fresh_row_keeps_editing() {
    let mut table = TableState::default();
    let id = table.add_row();
    assert!(!table.cancel_edit(id));
    assert!(table.row(id).unwrap().is_editing());
}

// =============================================================
// delete
// =============================================================

#[test]
fn deleting_only_row_resets_counter_and_shows_empty_state() {
    let mut table = table_of(&[("Mail", "high")]);
    let outcome = table.delete_row(table.rows[0].id).unwrap();
    assert_eq!(outcome.effect, DeleteEffect::ResetCounter);
    assert!(table.is_empty());
}

#[test]
fn deleting_real_row_marks_unsaved() {
    let mut table = table_of(&[("Mail", "high"), ("DNS", "low")]);
    let outcome = table.delete_row(table.rows[0].id).unwrap();
    assert_eq!(outcome.effect, DeleteEffect::MarkUnsaved);
    assert_eq!(outcome.removed.cells.service, "Mail");
    assert_eq!(names(&table), vec!["DNS"]);
}

#[test]
fn deleting_empty_row_decrements() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.add_row();
    assert_eq!(table.delete_row(id).unwrap().effect, DeleteEffect::Decrement);
}

#[test]
fn deleting_added_row_with_content_marks_unsaved() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.add_row();
    table.set_cell(id, Column::Service, "DNS".to_owned());
    assert_eq!(table.delete_row(id).unwrap().effect, DeleteEffect::MarkUnsaved);
}

#[test]
fn deleting_unknown_row_is_none() {
    let mut table = TableState::default();
    assert!(table.delete_row(42).is_none());
}

#[test]
fn mark_removing_flags_row() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.rows[0].id;
    table.mark_removing(id);
    assert!(table.row(id).unwrap().removing);
}

// =============================================================
// priority / filter
// =============================================================

#[test]
fn set_priority_reports_only_real_changes() {
    let mut table = table_of(&[("Mail", "high")]);
    let id = table.rows[0].id;
    assert!(!table.set_priority(id, Priority::High));
    assert!(table.set_priority(id, Priority::Medium));
    assert_eq!(table.row(id).unwrap().priority, Priority::Medium);
}

#[test]
fn filter_limits_visible_rows() {
    let mut table = table_of(&[("A", "high"), ("B", "low"), ("C", "high")]);
    table.set_filter(PriorityFilter::Only(Priority::High));
    let visible: Vec<String> = table.visible_rows().into_iter().map(|r| r.cells.service).collect();
    assert_eq!(visible, vec!["A", "C"]);
    table.set_filter(PriorityFilter::All);
    assert_eq!(table.visible_rows().len(), 3);
}

#[test]
fn priority_parse_is_lenient() {
    assert_eq!(Priority::parse("HIGH"), Priority::High);
    assert_eq!(Priority::parse(" medium "), Priority::Medium);
    assert_eq!(Priority::parse("urgent"), Priority::Low);
}

// =============================================================
// sort
// =============================================================

#[test]
fn priority_descending_is_high_medium_low_and_ascending_reverses() {
    let mut table = table_of(&[("L", "low"), ("H", "high"), ("M", "medium")]);
    table.sort_by(SortKey::Priority, SortDirection::Descending);
    assert_eq!(names(&table), vec!["H", "M", "L"]);
    table.sort_by(SortKey::Priority, SortDirection::Ascending);
    assert_eq!(names(&table), vec!["L", "M", "H"]);
}

#[test]
fn text_sort_is_lexicographic_and_stable() {
    let mut table = table_of(&[("b", "low"), ("a", "high"), ("b", "high")]);
    table.sort_by(SortKey::Cell(Column::Service), SortDirection::Ascending);
    let order: Vec<(String, Priority)> =
        table.rows.iter().map(|r| (r.cells.service.clone(), r.priority)).collect();
    assert_eq!(
        order,
        vec![("a".to_owned(), Priority::High), ("b".to_owned(), Priority::Low), ("b".to_owned(), Priority::High)]
    );
}

#[test]
fn text_sort_ignores_case() {
    let mut table = table_of(&[("cache", "low"), ("Billing", "low"), ("auth", "low")]);
    table.sort_by(SortKey::Cell(Column::Service), SortDirection::Ascending);
    assert_eq!(names(&table), vec!["auth", "Billing", "cache"]);
    table.sort_by(SortKey::Cell(Column::Service), SortDirection::Descending);
    assert_eq!(names(&table), vec!["cache", "Billing", "auth"]);
}

#[test]
fn case_variants_list_lowercase_first() {
    let mut table = table_of(&[("Mail", "low"), ("mail", "low")]);
    table.sort_by(SortKey::Cell(Column::Service), SortDirection::Ascending);
    assert_eq!(names(&table), vec!["mail", "Mail"]);
}

#[test]
fn time_columns_sort_by_source_time() {
    let records = vec![
        ServiceRecord { start_time: "14:30".to_owned(), ..record("late", "low") },
        ServiceRecord { start_time: "08:05".to_owned(), ..record("early", "low") },
    ];
    let mut table = TableState::from_records(&records, "2025-02-15");
    table.sort_by(SortKey::Cell(Column::StartTime), SortDirection::Ascending);
    assert_eq!(names(&table), vec!["early", "late"]);
}

#[test]
fn toggle_sort_starts_ascending_then_flips() {
    let mut table = table_of(&[("b", "low"), ("a", "high")]);
    let key = SortKey::Cell(Column::Service);
    assert_eq!(table.toggle_sort(key), SortDirection::Ascending);
    assert_eq!(names(&table), vec!["a", "b"]);
    assert_eq!(table.toggle_sort(key), SortDirection::Descending);
    assert_eq!(names(&table), vec!["b", "a"]);
    assert_eq!(table.toggle_sort(SortKey::Priority), SortDirection::Ascending);
    assert_eq!(table.ordering_for(SortKey::Priority), Some(SortDirection::Ascending));
    assert_eq!(table.ordering_for(key), None);
}

#[test]
fn sort_highlights_until_matching_clear() {
    let mut table = table_of(&[("b", "low"), ("a", "high")]);
    table.sort_by(SortKey::Priority, SortDirection::Descending);
    let first = table.highlight_seq;
    table.sort_by(SortKey::Priority, SortDirection::Ascending);
    table.clear_highlight(first);
    assert!(table.rows.iter().all(|r| r.highlighted));
    table.clear_highlight(table.highlight_seq);
    assert!(table.rows.iter().all(|r| !r.highlighted));
}

// =============================================================
// records / comparison
// =============================================================

#[test]
fn records_fall_back_end_date_to_date() {
    let mut table = TableState::default();
    let id = table.add_row();
    table.set_cell(id, Column::Service, "DNS".to_owned());
    table.set_cell(id, Column::Date, "2025-03-01".to_owned());
    let records = table.records();
    assert_eq!(records[0].end_date, "2025-03-01");
    assert_eq!(records[0].start_date, "2025-03-01");
    assert_eq!(records[0].priority, "low");
}

#[test]
fn loading_records_prefers_start_date_then_end_date_then_fallback() {
    let mut with_start = record("A", "high");
    with_start.start_date = "2025-01-01".to_owned();
    let without_dates = ServiceRecord { name: "B".to_owned(), ..ServiceRecord::default() };
    let table = TableState::from_records(&[with_start, record("C", "low"), without_dates], "2024-12-31");

    assert_eq!(table.rows[0].cells.date, "2025-01-01");
    assert_eq!(table.rows[1].cells.date, "2025-02-15");
    assert_eq!(table.rows[2].cells.date, "2024-12-31");
    assert_eq!(table.rows[2].cells.end_date, "2024-12-31");
}

#[test]
fn comparison_rows_join_window() {
    let table = table_of(&[("Mail", "high")]);
    let rows = table.comparison_rows();
    assert_eq!(rows[0].window, "09:00 - 11:00");
    assert_eq!(rows[0].date, "2025-02-15");
    assert_eq!(comparison_rows_from_records(&[record("Mail", "high")], "2025-02-15"), rows);
}
