//! Theme initialization and toggle.
//!
//! Reads the preference from `localStorage.theme` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to storage and
//! updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native and
//! SSR paths no-op and report the default theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::STORAGE_THEME;
use crate::state::ui::Theme;
use crate::util::storage;

/// Stored theme, dark when nothing was saved.
pub fn read_preference() -> Theme {
    Theme::parse(storage::get_raw(STORAGE_THEME).as_deref())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::set_raw(STORAGE_THEME, next.as_str());
    next
}
