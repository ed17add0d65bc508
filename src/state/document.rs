//! Document-level state: header title, source email body, comparison view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header title and original body travel with every sync and history
//! snapshot. The body viewer and the comparison view read from here.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::config::{DEFAULT_TITLE, FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP};
use crate::net::types::DocumentData;
use crate::state::table::ComparisonRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComparisonSource {
    Table,
    History { title: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentState {
    pub header_title: String,
    pub original_body: String,
    pub last_edited_by: Option<String>,
    /// Draft while the title is being edited.
    pub title_draft: Option<String>,
    pub body_font_size: u8,
    pub body_wrap: bool,
    pub comparison: Vec<ComparisonRow>,
    pub comparison_source: ComparisonSource,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            header_title: DEFAULT_TITLE.to_owned(),
            original_body: String::new(),
            last_edited_by: None,
            title_draft: None,
            body_font_size: FONT_SIZE_DEFAULT,
            body_wrap: true,
            comparison: Vec::new(),
            comparison_source: ComparisonSource::Table,
        }
    }
}

impl DocumentState {
    pub fn from_data(data: &DocumentData) -> Self {
        let mut state = Self::default();
        state.apply_data(data);
        state
    }

    /// Adopt title and body from a stored document or a history snapshot.
    pub fn apply_data(&mut self, data: &DocumentData) {
        if let Some(title) = data.header_title.as_deref().filter(|t| !t.trim().is_empty()) {
            self.header_title = title.to_owned();
        }
        if let Some(body) = &data.original_body {
            self.original_body.clone_from(body);
        }
        if data.last_edited_by.is_some() {
            self.last_edited_by.clone_from(&data.last_edited_by);
        }
        self.title_draft = None;
    }

    pub fn has_body(&self) -> bool {
        !self.original_body.trim().is_empty()
    }

    pub fn begin_title_edit(&mut self) {
        self.title_draft = Some(self.header_title.clone());
    }

    pub fn set_title_draft(&mut self, value: String) {
        if self.title_draft.is_some() {
            self.title_draft = Some(value);
        }
    }

    /// Finish editing. Returns the new title when it differs from the old one.
    pub fn commit_title(&mut self) -> Option<String> {
        let draft = self.title_draft.take()?;
        let draft = draft.trim();
        if draft.is_empty() || draft == self.header_title {
            return None;
        }
        self.header_title = draft.to_owned();
        Some(self.header_title.clone())
    }

    pub fn cancel_title_edit(&mut self) {
        self.title_draft = None;
    }

    pub fn increase_font(&mut self) {
        self.body_font_size = (self.body_font_size + FONT_SIZE_STEP).min(FONT_SIZE_MAX);
    }

    pub fn decrease_font(&mut self) {
        self.body_font_size = self.body_font_size.saturating_sub(FONT_SIZE_STEP).max(FONT_SIZE_MIN);
    }

    pub fn set_comparison(&mut self, rows: Vec<ComparisonRow>, source: ComparisonSource) {
        self.comparison = rows;
        self.comparison_source = source;
    }

    pub fn comparison_heading(&self) -> String {
        match &self.comparison_source {
            ComparisonSource::Table => "Current table".to_owned(),
            ComparisonSource::History { title } => format!("History: {title}"),
        }
    }
}
