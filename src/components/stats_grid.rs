//! Stats Grid Component
//!
//! Four stat cards over the aggregate server statistics.

use leptos::*;

use crate::components::CardSkeleton;
use crate::state::global::{GlobalState, Stats};
use crate::utils::{format_bytes, format_uptime};

/// View-model for the stats grid: label/value pairs in display order
pub fn stat_entries(stats: &Stats) -> [(&'static str, String); 4] {
    [
        ("Active Connections", stats.active_connections.to_string()),
        ("Total Profiles", stats.total_profiles.to_string()),
        ("Uptime", format_uptime(stats.uptime_seconds)),
        ("Traffic", format_bytes(stats.total_traffic_bytes)),
    ]
}

/// Stats grid component; skeleton cards until the first stats fetch
#[component]
pub fn StatsGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {move || {
                match state.stats.get() {
                    Some(stats) => stat_entries(&stats)
                        .into_iter()
                        .map(|(label, value)| view! { <StatCard label=label value=value /> })
                        .collect_view(),
                    None => (0..4).map(|_| view! { <CardSkeleton /> }).collect_view(),
                }
            }}
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <p class="text-sm text-gray-400">{label}</p>
            <p class="text-2xl font-bold mt-1">{value}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_entries_applies_formatters() {
        let stats = Stats {
            active_connections: 3,
            total_profiles: 12,
            uptime_seconds: 90_000,
            total_traffic_bytes: 1536,
        };

        let entries = stat_entries(&stats);
        assert_eq!(entries[0], ("Active Connections", "3".to_string()));
        assert_eq!(entries[1], ("Total Profiles", "12".to_string()));
        assert_eq!(entries[2], ("Uptime", "1d 1h".to_string()));
        assert_eq!(entries[3], ("Traffic", "1.5 KB".to_string()));
    }

    #[test]
    fn test_stat_entries_zero_stats() {
        let entries = stat_entries(&Stats::default());
        assert_eq!(entries[2].1, "0m");
        assert_eq!(entries[3].1, "0 Bytes");
    }
}
