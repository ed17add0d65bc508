//! The single active modal: a confirm dialog or the passkey prompt.
//!
//! DESIGN
//! ======
//! At most one dialog is active. Opening a new dialog supersedes the current
//! one; the caller resolves the superseded id as cancelled so whatever was
//! awaiting it sees `false`.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogTone {
    #[default]
    Info,
    Danger,
    Primary,
}

impl DialogTone {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Danger => "danger",
            Self::Primary => "primary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub tone: DialogTone,
    pub icon: String,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            tone: DialogTone::Info,
            icon: "fa-question-circle".to_owned(),
            title: "Confirm".to_owned(),
            message: "Are you sure?".to_owned(),
            confirm_text: "Confirm".to_owned(),
            cancel_text: "Cancel".to_owned(),
        }
    }
}

impl ConfirmOptions {
    pub fn new(tone: DialogTone, title: &str, message: &str, confirm_text: &str) -> Self {
        Self {
            tone,
            title: title.to_owned(),
            message: message.to_owned(),
            confirm_text: confirm_text.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        icon.clone_into(&mut self.icon);
        self
    }

    pub fn delete_row() -> Self {
        Self::new(
            DialogTone::Danger,
            "Delete Row",
            "Are you sure you want to delete this row? This action cannot be undone.",
            "Delete",
        )
        .with_icon("fa-trash")
    }

    pub fn load_history(view_only: bool) -> Self {
        let message = if view_only {
            "Load this previous version for viewing? The table view is replaced but nothing is synced."
        } else {
            "Are you sure you want to load this version? Current unsaved changes will be lost."
        };
        Self::new(DialogTone::Primary, "Load History Item", message, "Load").with_icon("fa-cloud-download-alt")
    }

    pub fn delete_history() -> Self {
        Self::new(
            DialogTone::Danger,
            "Delete History Item",
            "Are you sure you want to delete this history item? This action cannot be undone.",
            "Delete",
        )
        .with_icon("fa-trash")
    }

    pub fn delete_user(username: &str) -> Self {
        Self::new(
            DialogTone::Danger,
            "Delete User",
            &format!("Delete user \"{username}\"? They will no longer be able to log in."),
            "Delete",
        )
        .with_icon("fa-user-times")
    }

    pub fn reset_data() -> Self {
        Self::new(
            DialogTone::Danger,
            "Reset All Data",
            "This clears the table, title and original email for everyone. Continue?",
            "Reset",
        )
        .with_icon("fa-exclamation-triangle")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasskeyPrompt {
    pub message: String,
    pub input: String,
    pub error: Option<String>,
    pub busy: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Confirm(ConfirmOptions),
    Passkey(PasskeyPrompt),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveDialog {
    pub id: u64,
    pub kind: DialogKind,
}

#[derive(Clone, Debug, Default)]
pub struct DialogState {
    pub active: Option<ActiveDialog>,
    next_id: u64,
}

impl DialogState {
    /// Show `kind`. Returns the new id and the id of the dialog it replaced.
    pub fn open(&mut self, kind: DialogKind) -> (u64, Option<u64>) {
        self.next_id += 1;
        let id = self.next_id;
        let superseded = self.active.replace(ActiveDialog { id, kind }).map(|d| d.id);
        (id, superseded)
    }

    /// Close dialog `id` if it is still the active one.
    pub fn close(&mut self, id: u64) -> bool {
        if self.active.as_ref().is_some_and(|d| d.id == id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    fn passkey_mut(&mut self, id: u64) -> Option<&mut PasskeyPrompt> {
        match self.active.as_mut() {
            Some(ActiveDialog { id: active, kind: DialogKind::Passkey(prompt) }) if *active == id => Some(prompt),
            _ => None,
        }
    }

    pub fn passkey(&self) -> Option<(u64, &PasskeyPrompt)> {
        match self.active.as_ref() {
            Some(ActiveDialog { id, kind: DialogKind::Passkey(prompt) }) => Some((*id, prompt)),
            _ => None,
        }
    }

    pub fn set_passkey_input(&mut self, id: u64, value: String) {
        if let Some(prompt) = self.passkey_mut(id) {
            prompt.input = value;
        }
    }

    pub fn set_passkey_busy(&mut self, id: u64, busy: bool) {
        if let Some(prompt) = self.passkey_mut(id) {
            prompt.busy = busy;
        }
    }

    /// Invalid passkey: keep the prompt open, show `message`, clear the input.
    pub fn reject_passkey(&mut self, id: u64, message: String) {
        if let Some(prompt) = self.passkey_mut(id) {
            prompt.error = Some(message);
            prompt.input.clear();
            prompt.busy = false;
        }
    }
}
