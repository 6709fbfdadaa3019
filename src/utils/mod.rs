//! Utility Functions
//!
//! Pure formatting helpers and small browser-facing utilities.

pub mod clipboard;
pub mod debounce;
pub mod dialog;
pub mod format;

pub use clipboard::copy_to_clipboard;
pub use debounce::Debounce;
pub use format::{format_bytes, format_uptime, short_id, truncate_id};
