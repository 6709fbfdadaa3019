//! QR Code Modal
//!
//! Overlay showing the connection QR code for one profile. Closes on the
//! explicit control or a backdrop click.

use leptos::*;

use crate::state::controller;
use crate::state::global::GlobalState;
use crate::utils::short_id;

/// QR code modal overlay, hidden while no QR view is open
#[component]
pub fn QrModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.qr_modal.get().map(|qr| {
                let backdrop_state = state.clone();
                let close_state = state.clone();

                view! {
                    <div
                        class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
                        on:click=move |_| controller::close_qr(&backdrop_state)
                    >
                        <div
                            class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4"
                            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                        >
                            <div class="flex items-center justify-between mb-6">
                                <h2 class="text-xl font-semibold">"Connection QR Code"</h2>
                                <button
                                    on:click=move |_| controller::close_qr(&close_state)
                                    class="text-gray-400 hover:text-white"
                                >
                                    "✕"
                                </button>
                            </div>

                            <img src=qr.object_url.clone() alt="QR Code" class="max-w-full mx-auto rounded-lg" />

                            <p class="text-center text-gray-400 text-sm mt-4 font-mono">
                                {short_id(&qr.profile_id)}
                            </p>
                        </div>
                    </div>
                }
            })
        }}
    }
}
