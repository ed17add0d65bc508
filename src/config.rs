//! Client-wide constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timer periods, storage keys, and defaults are shared by state machines and
//! the components that drive them. Keeping them here lets the pure state code
//! and the browser glue agree on the same values.

/// Lifetime of a passkey session once granted.
pub const AUTH_TTL_MS: i64 = 10 * 60 * 1000;

/// How often the page re-checks the stored session expiry.
pub const AUTH_CHECK_INTERVAL_MS: u32 = 30_000;

/// Period of the remote update poll.
pub const UPDATE_POLL_INTERVAL_MS: u64 = 10_000;

/// Time the "synced" indicator stays up before reverting to "no changes".
pub const SYNCED_REVERT_MS: u64 = 5_000;

/// Auto-dismiss delay for non-persistent toasts.
pub const TOAST_DISMISS_MS: u64 = 3_000;

/// Fade-out animation applied before a deleted row leaves the table.
pub const ROW_FADE_MS: u64 = 300;

/// Highlight applied to rows after a sort.
pub const SORT_HIGHLIGHT_MS: u64 = 1_500;

/// Tick of the simulated upload progress bar.
pub const UPLOAD_TICK_MS: u32 = 200;

pub const STORAGE_AUTH_UNTIL: &str = "authUntil";
pub const STORAGE_THEME: &str = "theme";
pub const STORAGE_USER_ACTIONS_VISIBLE: &str = "userActionsVisible";

pub const DEFAULT_TITLE: &str = "Change Weekend";
pub const DEFAULT_FROM_ZONE: &str = "Europe/Stockholm";
pub const DEFAULT_TO_ZONE: &str = "Asia/Kolkata";

/// Date used for conversion when a row has no date of its own.
pub const FALLBACK_DATE: &str = "2023-01-01";

/// Element id of the JSON document embedded by the host page.
pub const INITIAL_DATA_ELEMENT_ID: &str = "initial-data";

pub const BEFORE_UNLOAD_MESSAGE: &str = "You have unsaved changes. Are you sure you want to leave?";

pub const FONT_SIZE_MIN: u8 = 10;
pub const FONT_SIZE_MAX: u8 = 24;
pub const FONT_SIZE_STEP: u8 = 2;
pub const FONT_SIZE_DEFAULT: u8 = 14;
