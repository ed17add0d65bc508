//! Document embedded by the host page.
//!
//! The server renders the stored document into
//! `<script id="initial-data" type="application/json">`. A missing or
//! malformed payload starts the page empty.

#[cfg(test)]
#[path = "initial_data_test.rs"]
mod initial_data_test;

use crate::net::types::DocumentData;

/// Parse the embedded JSON. Blank input means an empty document.
pub fn parse(raw: &str) -> DocumentData {
    if raw.trim().is_empty() {
        return DocumentData::default();
    }
    match serde_json::from_str::<DocumentData>(raw) {
        Ok(data) => data,
        Err(err) => {
            leptos::logging::warn!("initial data is not valid JSON: {err}");
            DocumentData::default()
        }
    }
}

/// Read and parse the embedded document.
pub fn load() -> DocumentData {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::config::INITIAL_DATA_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        parse(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DocumentData::default()
    }
}
