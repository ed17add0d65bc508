//! Standalone HTML export of the visible table and text downloads.
//!
//! The export renders what the user sees: filtered rows, converted times when
//! conversion is on, and the impact priority as a badge. Every cell is
//! HTML-escaped because the result is written out as a file, not through the
//! Leptos renderer.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::state::table::{Column, Priority, TableState};
use crate::state::timezone::TimezoneState;

pub const EXPORT_FILE_NAME: &str = "change_management.html";
pub const BODY_FILE_NAME: &str = "email_content.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub cells: [String; 6],
    pub priority: Priority,
}

/// Visible rows as displayed.
pub fn export_rows(table: &TableState, timezone: &TimezoneState) -> Vec<ExportRow> {
    table
        .visible_rows()
        .iter()
        .map(|row| ExportRow {
            cells: Column::ALL.map(|column| {
                let raw = row.cells.get(column);
                if column.is_time() { timezone.display_time(raw, &row.cells.date) } else { raw.to_owned() }
            }),
            priority: row.priority,
        })
        .collect()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Full HTML document for `rows`. `zone_label` names the time columns.
pub fn render_export_html(rows: &[ExportRow], zone_label: &str) -> String {
    let zone = escape_html(zone_label);
    let headings: String = Column::ALL
        .iter()
        .map(|column| {
            if column.is_time() {
                format!("<th>{} ({zone})</th>", column.heading())
            } else {
                format!("<th>{}</th>", column.heading())
            }
        })
        .collect();

    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.cells.iter().map(|c| format!("<td>{}</td>", escape_html(c))).collect();
            let priority = row.priority.as_str();
            format!(
                "<tr>{cells}<td><div class=\"priority-badge priority-badge-{priority}\">{}</div></td></tr>\n",
                row.priority.label()
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Change Management Table</title>\n</head>\n<body>\n\
         <table id=\"changeTable\">\n<thead><tr>{headings}<th>Impact Priority</th></tr></thead>\n\
         <tbody>\n{body}</tbody>\n</table>\n</body>\n</html>\n"
    )
}

/// Offer `content` as a file download.
pub fn download(file_name: &str, mime: &str, content: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        let anchor = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("a").ok())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(file_name);
            anchor.click();
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, mime, content);
    }
}

/// Copy `text` to the clipboard. Fire-and-forget.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
