//! Dashboard Controller
//!
//! Free functions that orchestrate the API client against the global state.
//! Components render the state; everything that mutates it lives here.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, QrView, ToastLevel};
use crate::utils::dialog;

/// Stats-only refresh tick interval
pub const STATS_REFRESH_MS: u32 = 10_000;

/// Lifetime of the "Refreshed" toast after a manual refresh
const REFRESH_TOAST_MS: u32 = 1500;

/// Startup sequence, called once from the `App` root.
///
/// Every step is best-effort: a failed probe or fetch never blocks the
/// steps after it, and nothing here is fatal.
pub fn init(state: GlobalState) {
    let startup = state.clone();
    spawn_local(async move {
        startup.loading.set(true);

        probe_health(&startup).await;
        load_system_info(&startup).await;
        load_profiles(&startup).await;
        load_stats(&startup).await;

        startup.loading.set(false);
    });

    // Stats-only refresh tick, leaked for the page lifetime
    gloo_timers::callback::Interval::new(STATS_REFRESH_MS, move || {
        let state = state.clone();
        spawn_local(async move {
            load_stats(&state).await;
        });
    })
    .forget();
}

/// Probe the health endpoint and update the connection indicator.
pub async fn probe_health(state: &GlobalState) {
    match api::check_health().await {
        Ok(()) => state.connected.set(true),
        Err(e) => {
            state.connected.set(false);
            web_sys::console::error_1(&format!("Health check failed: {}", e).into());
            state.push_toast("Failed to connect to backend", ToastLevel::Error);
        }
    }
}

/// Fetch server system info (best-effort, logged not surfaced)
pub async fn load_system_info(state: &GlobalState) {
    match api::fetch_system_info().await {
        Ok(info) => state.system_info.set(Some(info)),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load system info: {}", e).into());
        }
    }
}

/// Fetch the profile list; failures surface as an error toast
pub async fn load_profiles(state: &GlobalState) {
    let epoch = state.begin_profiles_load();
    match api::list_profiles().await {
        Ok(profiles) => {
            state.apply_profiles(epoch, profiles);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load profiles: {}", e).into());
            state.push_toast("Failed to load profiles", ToastLevel::Error);
        }
    }
}

/// Fetch stats (best-effort, logged not surfaced)
pub async fn load_stats(state: &GlobalState) {
    let epoch = state.begin_stats_load();
    match api::fetch_stats().await {
        Ok(stats) => {
            state.apply_stats(epoch, stats);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load stats: {}", e).into());
        }
    }
}

/// Re-fetch profiles and stats concurrently
pub async fn full_refresh(state: &GlobalState) {
    futures_util::future::join(load_profiles(state), load_stats(state)).await;
}

/// User-initiated refresh: full refresh plus a short-lived success toast
pub async fn manual_refresh(state: GlobalState) {
    full_refresh(&state).await;
    state.push_toast_with_duration("Refreshed", ToastLevel::Success, REFRESH_TOAST_MS);
}

/// Trim a submitted email, rejecting empty or whitespace-only input
pub fn normalize_email(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The client's message, or a generic fallback if it is empty
fn error_message(error: api::ApiError, fallback: &str) -> String {
    let message = error.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Create a profile from a form submission.
///
/// Empty input is rejected with a warning before any backend call. Returns
/// whether the input field should be cleared.
pub async fn submit_profile(state: GlobalState, email: String) -> bool {
    let Some(email) = normalize_email(&email) else {
        state.push_toast("Email is required", ToastLevel::Warning);
        return false;
    };

    match api::create_profile(&email).await {
        Ok(_profile) => {
            state.push_toast("Profile created successfully!", ToastLevel::Success);
            full_refresh(&state).await;
            true
        }
        Err(e) => {
            state.push_toast(
                &error_message(e, "Failed to create profile"),
                ToastLevel::Error,
            );
            false
        }
    }
}

/// Delete a profile after user confirmation
pub async fn remove_profile(state: GlobalState, profile_id: String) {
    let confirmed = dialog::confirm("Are you sure you want to delete this profile?").await;
    if !confirmed {
        return;
    }

    match api::delete_profile(&profile_id).await {
        Ok(()) => {
            state.push_toast("Profile deleted", ToastLevel::Success);
            full_refresh(&state).await;
        }
        Err(e) => {
            state.push_toast(
                &error_message(e, "Failed to delete profile"),
                ToastLevel::Error,
            );
        }
    }
}

/// Fetch a profile's QR code and open the modal.
///
/// The previous object URL, if any, is revoked before the new one is
/// installed.
pub async fn show_qr(state: GlobalState, profile_id: String) {
    match api::fetch_qr_code(&profile_id).await {
        Ok(bytes) => match make_png_url(&bytes) {
            Some(object_url) => {
                revoke_qr_url(&state);
                state.qr_modal.set(Some(QrView {
                    profile_id,
                    object_url,
                }));
            }
            None => state.push_toast("Failed to generate QR code", ToastLevel::Error),
        },
        Err(e) => {
            web_sys::console::error_1(&format!("QR fetch failed: {}", e).into());
            state.push_toast("Failed to generate QR code", ToastLevel::Error);
        }
    }
}

/// Close the QR modal, releasing its object URL
pub fn close_qr(state: &GlobalState) {
    revoke_qr_url(state);
    state.qr_modal.set(None);
}

fn revoke_qr_url(state: &GlobalState) {
    if let Some(view) = state.qr_modal.get_untracked() {
        let _ = web_sys::Url::revoke_object_url(&view.object_url);
    }
}

/// Build a blob object URL for a PNG payload
fn make_png_url(bytes: &[u8]) -> Option<String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_normalize_email_trims() {
        assert_eq!(
            normalize_email("  user@example.com  "),
            Some("user@example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_email_rejects_empty_input() {
        assert_eq!(normalize_email(""), None);
        assert_eq!(normalize_email("   "), None);
        assert_eq!(normalize_email("\t\n"), None);
    }

    #[test]
    fn test_error_message_prefers_client_detail() {
        let err = ApiError::Status {
            status: 409,
            detail: "Email already in use".to_string(),
        };
        assert_eq!(
            error_message(err, "Failed to create profile"),
            "Email already in use"
        );
    }

    #[test]
    fn test_error_message_falls_back_when_empty() {
        let err = ApiError::Status {
            status: 500,
            detail: String::new(),
        };
        assert_eq!(
            error_message(err, "Failed to create profile"),
            "Failed to create profile"
        );
    }
}
