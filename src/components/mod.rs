//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the change board chrome and route user actions into the
//! state structs they read from Leptos context providers.

pub mod admin_users_panel;
pub mod ai_chat;
pub mod ai_status_modal;
pub mod body_viewer;
pub mod change_indicator;
pub mod change_password_modal;
pub mod change_table;
pub mod comparison_view;
pub mod confirm_dialog;
pub mod header_bar;
pub mod history_modal;
pub mod modal_shell;
pub mod passkey_dialog;
pub mod profile_menu;
pub mod timezone_controls;
pub mod toasts;
pub mod update_banner;
pub mod upload_panel;
