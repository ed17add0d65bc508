//! Local UI chrome state (theme, menus, modals).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`table`,
//! `document`, `history`) so rendering controls can evolve independently of
//! the data they show.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored preference. Missing or unknown values mean dark.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon for the toggle button: offers the other theme.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "fa-sun",
            Self::Light => "fa-moon",
        }
    }
}

/// Which overlay panel is showing, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    OriginalBody,
    Comparison,
    Upload,
    ChangePassword,
    AdminUsers,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub modal: Modal,
    pub profile_menu_open: bool,
    pub sync_menu_open: bool,
}

impl UiState {
    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = modal;
        self.profile_menu_open = false;
        self.sync_menu_open = false;
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.modal == modal
    }
}
