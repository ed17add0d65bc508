//! Timezone conversion toggle and zone selection.

#[cfg(test)]
#[path = "timezone_test.rs"]
mod timezone_test;

use crate::config::{DEFAULT_FROM_ZONE, DEFAULT_TO_ZONE, FALLBACK_DATE};
use crate::util::timezone::{convert, zone_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimezoneState {
    pub enabled: bool,
    pub from: String,
    pub to: String,
}

impl Default for TimezoneState {
    fn default() -> Self {
        Self { enabled: false, from: DEFAULT_FROM_ZONE.to_owned(), to: DEFAULT_TO_ZONE.to_owned() }
    }
}

impl TimezoneState {
    /// Changing either zone switches conversion off so the table goes back
    /// to its source times.
    pub fn set_from(&mut self, zone: &str) {
        if self.from != zone {
            self.from = zone.to_owned();
            self.enabled = false;
        }
    }

    pub fn set_to(&mut self, zone: &str) {
        if self.to != zone {
            self.to = zone.to_owned();
            self.enabled = false;
        }
    }

    /// Project a stored time for display.
    pub fn display_time(&self, raw: &str, row_date: &str) -> String {
        if !self.enabled {
            return raw.to_owned();
        }
        let date = if row_date.trim().is_empty() { FALLBACK_DATE } else { row_date };
        convert(raw, date, &self.from, &self.to)
    }

    /// Zone label shown in the start/end time column headers.
    pub fn header_label(&self) -> &str {
        if self.enabled { zone_label(&self.to) } else { zone_label(&self.from) }
    }

    pub fn warning_text(&self) -> Option<String> {
        self.enabled.then(|| {
            format!(
                "Times are converted from {} to {}. Switch conversion off to edit source times.",
                zone_label(&self.from),
                zone_label(&self.to)
            )
        })
    }
}
