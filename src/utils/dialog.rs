//! Confirmation Dialog
//!
//! The blocking `window.confirm` prompt wrapped in an awaitable form, so a
//! future in-page modal is a drop-in replacement at the call sites.

pub async fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
