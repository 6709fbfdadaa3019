//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Default toast lifetime before the fade-out starts
pub const TOAST_DURATION_MS: u32 = 3000;
/// Fade-out duration before a toast is removed from the queue
pub const TOAST_FADE_MS: u32 = 300;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Profiles from the last successful list fetch
    pub profiles: RwSignal<Vec<Profile>>,
    /// Aggregate server statistics, `None` until the first successful fetch
    pub stats: RwSignal<Option<Stats>>,
    /// Server system information, fetched once at startup
    pub system_info: RwSignal<Option<SystemInfo>>,
    /// Result of the last backend health probe
    pub connected: RwSignal<bool>,
    /// Timestamp of the last successful stats fetch (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
    /// Global loading state (startup sequence)
    pub loading: RwSignal<bool>,
    /// Active toast notifications, oldest first
    pub toasts: RwSignal<Vec<Toast>>,
    /// Currently displayed QR code, `None` while the modal is closed
    pub qr_modal: RwSignal<Option<QrView>>,
    next_toast_id: RwSignal<u32>,
    profiles_epoch: RwSignal<u64>,
    stats_epoch: RwSignal<u64>,
}

/// A provisioned proxy client configuration from the backend.
///
/// Immutable once fetched; the whole list is replaced on each refresh.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    pub id: String,
    pub protocol: String,
    pub transport: String,
    pub security: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sni: Option<String>,
    pub connection_link: String,
}

/// Aggregate server statistics.
///
/// The backend may omit fields; missing values render as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Stats {
    #[serde(default)]
    pub active_connections: u64,
    #[serde(default)]
    pub total_profiles: u64,
    #[serde(default)]
    pub uptime_seconds: u64,
    #[serde(default)]
    pub total_traffic_bytes: u64,
}

/// Server system information
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub server_address: Option<String>,
}

/// Severity of a toast notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A queued toast notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub level: ToastLevel,
    /// Set when the fade-out has started; the toast is removed shortly after
    pub leaving: bool,
}

/// An open QR code view backed by a blob object URL.
///
/// The controller revokes `object_url` before replacing it and on modal
/// close, so the URL is only ever valid while the view is installed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrView {
    pub profile_id: String,
    pub object_url: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            profiles: create_rw_signal(Vec::new()),
            stats: create_rw_signal(None),
            system_info: create_rw_signal(None),
            connected: create_rw_signal(false),
            last_refresh: create_rw_signal(None),
            loading: create_rw_signal(false),
            toasts: create_rw_signal(Vec::new()),
            qr_modal: create_rw_signal(None),
            next_toast_id: create_rw_signal(0),
            profiles_epoch: create_rw_signal(0),
            stats_epoch: create_rw_signal(0),
        }
    }

    // ============ Toast queue ============

    /// Queue a toast without scheduling expiry. Returns its id.
    pub fn enqueue_toast(&self, message: &str, level: ToastLevel) -> u32 {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                level,
                leaving: false,
            });
        });
        id
    }

    /// Show a toast that fades and removes itself after the default duration
    pub fn push_toast(&self, message: &str, level: ToastLevel) {
        self.push_toast_with_duration(message, level, TOAST_DURATION_MS);
    }

    /// Show a toast with an explicit lifetime (fade-then-remove)
    pub fn push_toast_with_duration(&self, message: &str, level: ToastLevel, duration_ms: u32) {
        let id = self.enqueue_toast(message, level);

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(duration_ms, move || {
            toasts.update(|toasts| {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.leaving = true;
                }
            });
            gloo_timers::callback::Timeout::new(TOAST_FADE_MS, move || {
                toasts.update(|toasts| toasts.retain(|t| t.id != id));
            })
            .forget();
        })
        .forget();
    }

    /// Remove a toast immediately (explicit dismissal)
    pub fn dismiss_toast(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    // ============ Load epochs ============
    //
    // Overlapping loads are not mutually excluded; each resource carries a
    // monotonic epoch instead. A loader snapshots the epoch when it starts,
    // and its response is discarded if a newer load started in the meantime.

    /// Start a profiles load; returns the epoch to pass to `apply_profiles`
    pub fn begin_profiles_load(&self) -> u64 {
        let epoch = self.profiles_epoch.get_untracked() + 1;
        self.profiles_epoch.set(epoch);
        epoch
    }

    /// Install a fetched profile list unless a newer load has started.
    /// Returns whether the list was applied.
    pub fn apply_profiles(&self, epoch: u64, profiles: Vec<Profile>) -> bool {
        if self.profiles_epoch.get_untracked() != epoch {
            return false;
        }
        self.profiles.set(profiles);
        true
    }

    /// Start a stats load; returns the epoch to pass to `apply_stats`
    pub fn begin_stats_load(&self) -> u64 {
        let epoch = self.stats_epoch.get_untracked() + 1;
        self.stats_epoch.set(epoch);
        epoch
    }

    /// Install fetched stats unless a newer load has started. Also records
    /// the refresh timestamp shown in the footer.
    pub fn apply_stats(&self, epoch: u64, stats: Stats) -> bool {
        if self.stats_epoch.get_untracked() != epoch {
            return false;
        }
        self.stats.set(Some(stats));
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
        true
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn test_profile_deserializes_backend_shape() {
        let json = r#"{
            "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "protocol": "vless",
            "transport": "ws",
            "security": "tls",
            "email": "user@example.com",
            "sni": "cdn.example.com",
            "connection_link": "vless://6ba7b810@example.com:443"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.protocol, "vless");
        assert_eq!(profile.sni.as_deref(), Some("cdn.example.com"));
    }

    #[test]
    fn test_profile_optional_fields_default() {
        let json = r#"{
            "id": "abc",
            "protocol": "vless",
            "transport": "tcp",
            "security": "reality",
            "connection_link": "vless://abc@host:443"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.email, None);
        assert_eq!(profile.sni, None);
    }

    #[test]
    fn test_stats_missing_fields_are_zero() {
        let stats: Stats = serde_json::from_str(r#"{"uptime_seconds": 120}"#).unwrap();
        assert_eq!(stats.uptime_seconds, 120);
        assert_eq!(stats.active_connections, 0);
        assert_eq!(stats.total_traffic_bytes, 0);
    }

    #[test]
    fn test_toast_ids_unique_and_increasing() {
        with_runtime(|| {
            let state = GlobalState::new();
            let a = state.enqueue_toast("first", ToastLevel::Info);
            let b = state.enqueue_toast("second", ToastLevel::Success);
            assert!(b > a);
            assert_eq!(state.toasts.get_untracked().len(), 2);
        });
    }

    #[test]
    fn test_dismiss_removes_only_target_toast() {
        with_runtime(|| {
            let state = GlobalState::new();
            let a = state.enqueue_toast("keep", ToastLevel::Info);
            let b = state.enqueue_toast("drop", ToastLevel::Error);
            state.dismiss_toast(b);

            let toasts = state.toasts.get_untracked();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].id, a);
            assert_eq!(toasts[0].message, "keep");
        });
    }

    #[test]
    fn test_stale_profile_load_is_discarded() {
        with_runtime(|| {
            let state = GlobalState::new();
            let profile = |id: &str| Profile {
                id: id.to_string(),
                protocol: "vless".to_string(),
                transport: "ws".to_string(),
                security: "tls".to_string(),
                email: None,
                sni: None,
                connection_link: format!("vless://{}", id),
            };

            let stale = state.begin_profiles_load();
            let fresh = state.begin_profiles_load();

            // The newer load finishes first, then the stale response arrives
            assert!(state.apply_profiles(fresh, vec![profile("new")]));
            assert!(!state.apply_profiles(stale, vec![profile("old"), profile("older")]));

            let profiles = state.profiles.get_untracked();
            assert_eq!(profiles.len(), 1);
            assert_eq!(profiles[0].id, "new");
        });
    }

    #[test]
    fn test_stale_stats_load_is_discarded() {
        with_runtime(|| {
            let state = GlobalState::new();

            let stale = state.begin_stats_load();
            let fresh = state.begin_stats_load();

            assert!(state.apply_stats(
                fresh,
                Stats {
                    total_profiles: 2,
                    ..Stats::default()
                }
            ));
            assert!(!state.apply_stats(
                stale,
                Stats {
                    total_profiles: 9,
                    ..Stats::default()
                }
            ));

            assert_eq!(state.stats.get_untracked().unwrap().total_profiles, 2);
            assert!(state.last_refresh.get_untracked().is_some());
        });
    }
}
