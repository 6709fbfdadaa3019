//! Profile List Component
//!
//! Profile cards with QR, copy, and delete actions.

use leptos::*;

use crate::components::ListSkeleton;
use crate::state::controller;
use crate::state::global::{GlobalState, Profile};
use crate::utils::{copy_to_clipboard, short_id};

/// Profile list with live count header
#[component]
pub fn ProfileList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let profiles_signal = state.profiles;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">
                    "Profiles "
                    <span class="text-gray-400 font-normal">
                        {move || format!("({})", profiles_signal.get().len())}
                    </span>
                </h2>
            </div>

            {move || {
                let profiles = profiles_signal.get();
                if profiles.is_empty() {
                    if state.loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        view! {
                            <div class="text-center py-12">
                                <div class="text-4xl mb-3">"📭"</div>
                                <p class="text-gray-400">"No profiles yet. Create your first one above."</p>
                            </div>
                        }.into_view()
                    }
                } else {
                    view! {
                        <div class="space-y-3">
                            {profiles.into_iter().map(|profile| {
                                view! { <ProfileCard profile=profile /> }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// Single profile card
#[component]
fn ProfileCard(profile: Profile) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let qr_id = profile.id.clone();
    let delete_id = profile.id.clone();
    let link = profile.connection_link.clone();

    let state_for_qr = state.clone();
    let state_for_copy = state.clone();
    let state_for_delete = state;

    let show_qr = move |_| {
        let state = state_for_qr.clone();
        let id = qr_id.clone();
        spawn_local(async move {
            controller::show_qr(state, id).await;
        });
    };

    let copy_link = move |_| {
        copy_to_clipboard(state_for_copy.clone(), link.clone());
    };

    let delete = move |_| {
        let state = state_for_delete.clone();
        let id = delete_id.clone();
        spawn_local(async move {
            controller::remove_profile(state, id).await;
        });
    };

    view! {
        <div class="bg-gray-900 rounded-lg p-4 border border-gray-700 hover:border-primary-500/50 transition">
            <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-2">
                        <span class="px-2 py-1 text-xs font-medium rounded bg-primary-500/20 text-primary-400">
                            {profile.protocol.to_uppercase()}
                        </span>
                        <span class="text-xs text-gray-500">
                            {format!("{} • {}", profile.transport, profile.security)}
                        </span>
                    </div>
                    <p class="font-mono text-sm text-gray-300 mb-1">{short_id(&profile.id)}</p>
                    <p class="text-sm text-gray-400">
                        {profile.email.clone().unwrap_or_else(|| "No email".to_string())}
                    </p>
                    {profile.sni.clone().map(|sni| view! {
                        <p class="text-xs text-gray-500 mt-1">"SNI: "{sni}</p>
                    })}
                </div>

                <div class="flex flex-wrap gap-2">
                    <button
                        on:click=show_qr
                        title="Generate QR Code"
                        class="px-3 py-1.5 text-sm bg-gray-700 hover:bg-gray-600 rounded transition"
                    >
                        "QR"
                    </button>
                    <button
                        on:click=copy_link
                        title="Copy Connection Link"
                        class="px-3 py-1.5 text-sm bg-gray-700 hover:bg-gray-600 rounded transition"
                    >
                        "Copy"
                    </button>
                    <button
                        on:click=delete
                        title="Delete Profile"
                        class="px-3 py-1.5 text-sm bg-red-600 hover:bg-red-700 rounded transition"
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
