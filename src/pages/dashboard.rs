//! Dashboard Page
//!
//! Main view: stats overview, profile creation, and the profiles list.

use leptos::*;

use crate::components::{ProfileForm, ProfileList, QrModal, StatsGrid};
use crate::state::controller;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (refreshing, set_refreshing) = create_signal(false);

    let state_for_refresh = state;
    let on_refresh = move |_| {
        if refreshing.get() {
            return;
        }
        set_refreshing.set(true);

        let state_clone = state_for_refresh.clone();
        spawn_local(async move {
            controller::manual_refresh(state_clone).await;
            set_refreshing.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Manage your proxy profiles"</p>
                </div>

                <button
                    on:click=on_refresh
                    disabled=move || refreshing.get()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                           rounded-lg font-medium transition-colors flex items-center space-x-2"
                >
                    {move || if refreshing.get() {
                        view! {
                            <div class="loading-spinner w-4 h-4" />
                            <span>"Refreshing..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Refresh"</span>
                        }.into_view()
                    }}
                </button>
            </div>

            // Server statistics
            <section>
                <h2 class="text-lg font-semibold mb-4">"Server Statistics"</h2>
                <StatsGrid />
            </section>

            // Profile creation
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"New Profile"</h2>
                <ProfileForm />
            </section>

            // Profiles
            <ProfileList />

            // QR overlay
            <QrModal />
        </div>
    }
}
