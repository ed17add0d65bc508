//! Wire DTOs for the change-management HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! These types mirror the JSON the server sends and expects. Field names
//! follow the wire (some endpoints use camelCase, others snake_case), and
//! optional server fields default so older payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// GENERIC RESPONSES
// =============================================================================

/// The `{status, message, ...}` envelope most mutating endpoints return.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnabledResponse {
    #[serde(default)]
    pub enabled: bool,
}

// =============================================================================
// TABLE DATA
// =============================================================================

/// One service row as stored in the document and in history snapshots.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub priority: String,
}

/// Body of `POST /sync-all-data` and `POST /sync-to-history`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncRequest {
    pub services: Vec<ServiceRecord>,
    pub date: String,
    pub header_title: String,
    pub original_body: String,
}

/// The stored document: initial page data and history snapshot payloads.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentData {
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub header_title: Option<String>,
    #[serde(default)]
    pub original_body: Option<String>,
    #[serde(default)]
    pub last_modified: Option<f64>,
    #[serde(default)]
    pub last_edited_by: Option<String>,
}

/// Body of `POST /save-changes`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveRowRequest {
    pub service: String,
    pub date: String,
    pub start_date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub comments: String,
    #[serde(rename = "impactPriority")]
    pub impact_priority: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteRowRequest {
    pub service: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveTitleRequest {
    pub title: String,
}

// =============================================================================
// HISTORY
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default)]
    pub title: String,
    /// Server-side save time, `yyyy-MM-dd HH:mm:ss` in UTC.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub data: DocumentData,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

/// `GET /get-history` answers with a paged object; older servers send a bare array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum HistoryResponse {
    Bare(Vec<HistoryItem>),
    Paged {
        #[serde(default)]
        items: Vec<HistoryItem>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
}

impl HistoryResponse {
    pub fn into_parts(self) -> (Vec<HistoryItem>, Option<Pagination>) {
        match self {
            Self::Bare(items) => (items, None),
            Self::Paged { items, pagination } => (items, pagination),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoadHistoryResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<DocumentData>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckUpdatesResponse {
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub timestamp: Option<f64>,
}

// =============================================================================
// ACCOUNTS
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    #[serde(default)]
    pub last_login: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<UserSummary>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsernameRequest {
    pub username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleUpdateRequest {
    pub username: String,
    pub role: String,
}

// =============================================================================
// AI
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiContext {
    pub page_title: String,
    pub header_title: String,
    pub date: String,
    pub services: Vec<ServiceRecord>,
    pub original_email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskAiRequest {
    pub question: String,
    pub context: AiContext,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskAiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiPerformance {
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub request_count: Option<u64>,
    #[serde(default)]
    pub last_request: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiStatus {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub model_available: bool,
    #[serde(default)]
    pub api_key_status: Option<String>,
    #[serde(default)]
    pub api_key_configured: bool,
    #[serde(default)]
    pub connection_status: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub performance: Option<AiPerformance>,
}
