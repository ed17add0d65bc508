//! Change table model: rows, in-place editing, filter, and sort.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::change_table` renders this state and routes user actions to
//! the methods below. Every mutation that matters to sync status returns an
//! outcome the caller forwards to the change tracker, so this module stays
//! free of tracker and network concerns.
//!
//! DESIGN
//! ======
//! Rows always hold source (unconverted) times. Timezone conversion is a view
//! projection applied by the renderer, which is what makes toggling
//! conversion idempotent.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use crate::net::types::{SaveRowRequest, ServiceRecord};

pub type RowId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Sort rank: high sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parse a wire value. Unknown values fall back to `Low`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => p == priority,
        }
    }
}

/// The six editable content columns, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Service,
    Date,
    StartTime,
    EndTime,
    EndDate,
    Comments,
}

impl Column {
    pub const ALL: [Self; 6] =
        [Self::Service, Self::Date, Self::StartTime, Self::EndTime, Self::EndDate, Self::Comments];

    pub fn heading(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Date => "Date",
            Self::StartTime => "Start Time",
            Self::EndTime => "End Time",
            Self::EndDate => "End Date",
            Self::Comments => "Comments",
        }
    }

    pub fn is_time(self) -> bool {
        matches!(self, Self::StartTime | Self::EndTime)
    }
}

/// Sortable columns: the content columns plus impact priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Cell(Column),
    Priority,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowCells {
    pub service: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub end_date: String,
    pub comments: String,
}

impl RowCells {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Service => &self.service,
            Column::Date => &self.date,
            Column::StartTime => &self.start_time,
            Column::EndTime => &self.end_time,
            Column::EndDate => &self.end_date,
            Column::Comments => &self.comments,
        }
    }

    pub fn set(&mut self, column: Column, value: String) {
        let slot = match column {
            Column::Service => &mut self.service,
            Column::Date => &mut self.date,
            Column::StartTime => &mut self.start_time,
            Column::EndTime => &mut self.end_time,
            Column::EndDate => &mut self.end_date,
            Column::Comments => &mut self.comments,
        };
        *slot = value;
    }

    fn trimmed(&self) -> Self {
        Self {
            service: self.service.trim().to_owned(),
            date: self.date.trim().to_owned(),
            start_time: self.start_time.trim().to_owned(),
            end_time: self.end_time.trim().to_owned(),
            end_date: self.end_date.trim().to_owned(),
            comments: self.comments.trim().to_owned(),
        }
    }
}

/// Snapshot taken when a row enters edit mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSnapshot {
    pub cells: RowCells,
    pub priority: Priority,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub cells: RowCells,
    pub priority: Priority,
    /// `Some` while the row is in edit mode. New rows start editing without
    /// a snapshot.
    pub editing: Option<Option<EditSnapshot>>,
    /// Added locally and never saved.
    pub is_new: bool,
    pub removing: bool,
    pub highlighted: bool,
}

impl Row {
    pub fn from_cells(id: RowId, cells: RowCells, priority: Priority) -> Self {
        Self { id, cells, priority, ..Self::default() }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn to_record(&self) -> ServiceRecord {
        let cells = self.cells.trimmed();
        let end_date = if cells.end_date.is_empty() { cells.date.clone() } else { cells.end_date };
        ServiceRecord {
            name: cells.service,
            start_date: cells.date,
            start_time: cells.start_time,
            end_time: cells.end_time,
            end_date,
            comments: cells.comments,
            priority: self.priority.as_str().to_owned(),
        }
    }

    pub fn to_save_request(&self) -> SaveRowRequest {
        let cells = self.cells.trimmed();
        SaveRowRequest {
            service: cells.service,
            date: cells.date.clone(),
            start_date: cells.date,
            start_time: cells.start_time,
            end_time: cells.end_time,
            end_date: cells.end_date,
            comments: cells.comments,
            impact_priority: self.priority.as_str().to_owned(),
        }
    }
}

fn is_blank_cell(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "-" || v == "–" || v.eq_ignore_ascii_case("n/a")
}

/// Case-insensitive text order; among case variants lowercase sorts first.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

/// A row is empty when all six content cells are blank-like. A freshly
/// added row stays empty until something is typed into it.
pub fn is_empty_row(row: &Row) -> bool {
    Column::ALL.iter().all(|c| is_blank_cell(row.cells.get(*c)))
}

/// Result of committing an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveOutcome {
    pub changed: bool,
    pub was_new: bool,
    pub request: SaveRowRequest,
}

/// What a delete means for the change tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteEffect {
    /// A real row went away: one more unsynced change.
    MarkUnsaved,
    /// An empty row was discarded: undo its pending change.
    Decrement,
    /// The table is now empty: nothing left to sync.
    ResetCounter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: Row,
    pub effect: DeleteEffect,
}

/// Read-only comparison row: `{service, date, "start - end", comments}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub service: String,
    pub date: String,
    pub window: String,
    pub comments: String,
}

#[derive(Clone, Debug, Default)]
pub struct TableState {
    pub rows: Vec<Row>,
    pub filter: PriorityFilter,
    pub sort: Option<(SortKey, SortDirection)>,
    pub highlight_seq: u64,
    next_id: RowId,
}

impl TableState {
    pub fn from_records(records: &[ServiceRecord], fallback_date: &str) -> Self {
        let mut state = Self::default();
        state.replace_records(records, fallback_date);
        state
    }

    /// Rebuild every row from stored records (initial data or a history load).
    pub fn replace_records(&mut self, records: &[ServiceRecord], fallback_date: &str) {
        self.rows.clear();
        self.sort = None;
        for record in records {
            let id = self.alloc_id();
            self.rows.push(Row::from_cells(id, cells_from_record(record, fallback_date), Priority::parse(&record.priority)));
        }
    }

    fn alloc_id(&mut self) -> RowId {
        self.next_id += 1;
        self.next_id
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Whether the empty-state placeholder should render.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible_rows(&self) -> Vec<Row> {
        self.rows.iter().filter(|r| self.filter.matches(r.priority)).cloned().collect()
    }

    pub fn add_row(&mut self) -> RowId {
        let id = self.alloc_id();
        self.rows.push(Row { id, editing: Some(None), is_new: true, ..Row::default() });
        id
    }

    pub fn begin_edit(&mut self, id: RowId) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        if row.editing.is_none() {
            row.editing = Some(Some(EditSnapshot { cells: row.cells.clone(), priority: row.priority }));
        }
        true
    }

    pub fn set_cell(&mut self, id: RowId, column: Column, value: String) {
        if let Some(row) = self.row_mut(id) {
            if row.is_editing() {
                row.cells.set(column, value);
            }
        }
    }

    /// Escape: restore cells and priority from the snapshot. Rows without a
    /// snapshot (fresh rows) stay as they are.
    pub fn cancel_edit(&mut self, id: RowId) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        match row.editing.take() {
            Some(Some(snapshot)) => {
                row.cells = snapshot.cells;
                row.priority = snapshot.priority;
                true
            }
            other => {
                row.editing = other;
                false
            }
        }
    }

    /// Commit the row's edit session.
    pub fn save_row(&mut self, id: RowId) -> Option<SaveOutcome> {
        let row = self.row_mut(id)?;
        let session = row.editing.take()?;
        row.cells = row.cells.trimmed();
        let changed = match session {
            Some(snapshot) => snapshot.cells != row.cells || snapshot.priority != row.priority,
            None => !is_empty_row(row),
        };
        let was_new = row.is_new;
        row.is_new = false;
        Some(SaveOutcome { changed, was_new, request: row.to_save_request() })
    }

    pub fn mark_removing(&mut self, id: RowId) {
        if let Some(row) = self.row_mut(id) {
            row.removing = true;
        }
    }

    pub fn delete_row(&mut self, id: RowId) -> Option<DeleteOutcome> {
        let index = self.rows.iter().position(|r| r.id == id)?;
        let removed = self.rows.remove(index);
        let effect = if self.rows.is_empty() {
            DeleteEffect::ResetCounter
        } else if is_empty_row(&removed) {
            DeleteEffect::Decrement
        } else {
            DeleteEffect::MarkUnsaved
        };
        Some(DeleteOutcome { removed, effect })
    }

    /// Returns `true` when the priority actually changed.
    pub fn set_priority(&mut self, id: RowId, priority: Priority) -> bool {
        match self.row_mut(id) {
            Some(row) if row.priority != priority => {
                row.priority = priority;
                true
            }
            _ => false,
        }
    }

    pub fn set_filter(&mut self, filter: PriorityFilter) {
        self.filter = filter;
    }

    /// Header click: first click sorts ascending, repeated clicks flip.
    pub fn toggle_sort(&mut self, key: SortKey) -> SortDirection {
        let direction = match self.sort {
            Some((current, dir)) if current == key => dir.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort_by(key, direction);
        direction
    }

    /// Stable sort of all rows. Priority descending lists high, medium, low.
    pub fn sort_by(&mut self, key: SortKey, direction: SortDirection) {
        self.rows.sort_by(|a, b| {
            let ord = match key {
                SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
                SortKey::Cell(column) => compare_text(a.cells.get(column), b.cells.get(column)),
            };
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        self.sort = Some((key, direction));
        self.highlight_seq += 1;
        for row in &mut self.rows {
            row.highlighted = true;
        }
    }

    /// Clear the post-sort highlight unless a newer sort happened since.
    pub fn clear_highlight(&mut self, seq: u64) {
        if seq == self.highlight_seq {
            for row in &mut self.rows {
                row.highlighted = false;
            }
        }
    }

    /// Rows as sync payload records, in table order.
    pub fn records(&self) -> Vec<ServiceRecord> {
        self.rows.iter().map(Row::to_record).collect()
    }

    pub fn comparison_rows(&self) -> Vec<ComparisonRow> {
        self.rows
            .iter()
            .map(|row| comparison_row(&row.cells.service, &row.cells.date, &row.cells.start_time, &row.cells.end_time, &row.cells.comments))
            .collect()
    }

    /// Current sort direction when the table is sorted by `key`.
    pub fn ordering_for(&self, key: SortKey) -> Option<SortDirection> {
        self.sort.and_then(|(k, d)| (k == key).then_some(d))
    }
}

pub fn comparison_row(service: &str, date: &str, start: &str, end: &str, comments: &str) -> ComparisonRow {
    ComparisonRow {
        service: service.trim().to_owned(),
        date: date.trim().to_owned(),
        window: format!("{} - {}", start.trim(), end.trim()),
        comments: comments.trim().to_owned(),
    }
}

/// Comparison rows straight from stored records (history snapshots).
pub fn comparison_rows_from_records(records: &[ServiceRecord], fallback_date: &str) -> Vec<ComparisonRow> {
    records
        .iter()
        .map(|r| {
            let cells = cells_from_record(r, fallback_date);
            comparison_row(&cells.service, &cells.date, &cells.start_time, &cells.end_time, &cells.comments)
        })
        .collect()
}

fn cells_from_record(record: &ServiceRecord, fallback_date: &str) -> RowCells {
    let first_non_blank = |values: &[&str]| -> String {
        values.iter().find(|v| !v.trim().is_empty()).map_or_else(String::new, |v| v.trim().to_owned())
    };
    RowCells {
        service: record.name.trim().to_owned(),
        date: first_non_blank(&[&record.start_date, &record.end_date, fallback_date]),
        start_time: record.start_time.trim().to_owned(),
        end_time: record.end_time.trim().to_owned(),
        end_date: first_non_blank(&[&record.end_date, fallback_date]),
        comments: record.comments.trim().to_owned(),
    }
}
