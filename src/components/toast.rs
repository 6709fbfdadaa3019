//! Toast Notification Component
//!
//! Renders the global toast queue.

use leptos::*;

use crate::state::global::{GlobalState, Toast, ToastLevel};

/// Toast notification container
#[component]
pub fn ToastStack() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.toasts.get()
                    .into_iter()
                    .map(|toast| view! { <ToastBanner toast=toast /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastBanner(toast: Toast) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (icon, bg_class) = match toast.level {
        ToastLevel::Success => ("✓", "bg-green-600"),
        ToastLevel::Error => ("✕", "bg-red-600"),
        ToastLevel::Warning => ("⚠", "bg-yellow-600"),
        ToastLevel::Info => ("ℹ", "bg-blue-600"),
    };

    // Slide in on entry, fade out once expiry has marked the toast leaving
    let motion = if toast.leaving {
        "opacity-0 translate-x-8"
    } else {
        "animate-slide-in"
    };

    let id = toast.id;

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out {}",
            bg_class, motion
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium flex-1">{toast.message}</span>
            <button
                on:click=move |_| state.dismiss_toast(id)
                class="text-white/80 hover:text-white"
            >
                "×"
            </button>
        </div>
    }
}
