//! Profile Creation Form
//!
//! Email input and submit flow for provisioning a new profile.

use leptos::*;

use crate::state::controller;
use crate::state::global::GlobalState;

/// Create-profile form component
#[component]
pub fn ProfileForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get() {
            return;
        }

        let value = email.get();
        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            // Clearing the input is tied to a successful create
            if controller::submit_profile(state_clone, value).await {
                set_email.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex flex-col sm:flex-row gap-3">
            <input
                type="text"
                placeholder="user@example.com"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
                class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Creating..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Create Profile"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}
