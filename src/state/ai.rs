//! AI assistant chat and status state.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use crate::net::types::AiStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiRole {
    User,
    Assistant,
    Error,
}

/// A single AI conversation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiMessage {
    pub id: u64,
    pub role: AiRole,
    pub content: String,
}

#[derive(Clone, Debug, Default)]
pub struct AiState {
    /// Server feature flag; the chat widget is hidden when off.
    pub enabled: bool,
    pub open: bool,
    pub messages: Vec<AiMessage>,
    pub loading: bool,
    pub status: Option<AiStatus>,
    pub status_open: bool,
    pub status_loading: bool,
    pub status_error: Option<String>,
    next_id: u64,
}

impl AiState {
    fn push(&mut self, role: AiRole, content: String) {
        self.next_id += 1;
        self.messages.push(AiMessage { id: self.next_id, role, content });
    }

    /// Record a question and enter the loading state. Returns the trimmed
    /// question, or `None` when blank or a request is already in flight.
    pub fn begin_question(&mut self, text: &str) -> Option<String> {
        let question = text.trim();
        if question.is_empty() || self.loading {
            return None;
        }
        self.push(AiRole::User, question.to_owned());
        self.loading = true;
        Some(question.to_owned())
    }

    pub fn push_answer(&mut self, markdown: String) {
        self.loading = false;
        self.push(AiRole::Assistant, markdown);
    }

    pub fn push_error(&mut self, message: String) {
        self.loading = false;
        self.push(AiRole::Error, message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Label/value rows for the status modal.
pub fn status_rows(status: &AiStatus) -> Vec<(&'static str, String)> {
    let text = |v: &Option<String>| v.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "Unknown".to_owned());
    let yes_no = |b: bool| if b { "Yes".to_owned() } else { "No".to_owned() };

    let mut rows = vec![
        ("Provider", text(&status.provider)),
        ("Model", text(&status.model)),
        ("Model available", yes_no(status.model_available)),
        ("API key configured", yes_no(status.api_key_configured)),
        ("API key status", text(&status.api_key_status)),
        ("Connection", text(&status.connection_status)),
    ];
    if let Some(perf) = &status.performance {
        rows.push(("Requests", perf.request_count.map_or_else(|| "0".to_owned(), |n| n.to_string())));
        rows.push((
            "Success rate",
            perf.success_rate.map_or_else(|| "-".to_owned(), |r| format!("{r:.1}%")),
        ));
        rows.push((
            "Avg response time",
            perf.response_time.map_or_else(|| "-".to_owned(), |t| format!("{t:.2}s")),
        ));
        rows.push(("Last request", text(&perf.last_request)));
    }
    if let Some(err) = status.error.as_ref().filter(|e| !e.is_empty()) {
        rows.push(("Error", err.clone()));
    }
    rows
}
