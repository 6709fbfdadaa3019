//! Settings Page
//!
//! API connection configuration and backup management.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::controller;
use crate::state::global::{GlobalState, ToastLevel};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Xray dashboard"</p>
            </div>

            // API Connection
            <ApiSettings />

            // Data Management
            <DataManagement />

            // About
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        api::set_api_base(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_health().await {
                Ok(()) => {
                    set_test_result.set(Some(true));
                    state_clone.connected.set(true);
                    state_clone.push_toast("Connection successful!", ToastLevel::Success);
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.connected.set(false);
                    state_clone
                        .push_toast(&format!("Connection failed: {}", e), ToastLevel::Error);
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state_for_save.push_toast("API URL saved", ToastLevel::Success);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Backend API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Test status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Data management section: backup download and restore
#[component]
fn DataManagement() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (downloading, set_downloading) = create_signal(false);
    let (restoring, set_restoring) = create_signal(false);

    let state_for_backup = state.clone();
    let download_backup = move |_| {
        set_downloading.set(true);

        let state_clone = state_for_backup.clone();
        spawn_local(async move {
            match api::create_backup().await {
                Ok(backup) => {
                    let pretty = serde_json::to_string_pretty(&backup)
                        .unwrap_or_else(|_| backup.to_string());
                    if trigger_download(&pretty, "xray-backup.json") {
                        state_clone.push_toast("Backup downloaded", ToastLevel::Success);
                    } else {
                        state_clone
                            .push_toast("Failed to prepare backup download", ToastLevel::Error);
                    }
                }
                Err(e) => {
                    state_clone.push_toast(&e.to_string(), ToastLevel::Error);
                }
            }
            set_downloading.set(false);
        });
    };

    // Restore flow: read the picked file as text, POST it, then refresh
    let state_for_restore = state;
    let handle_file_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };

        let file_reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => return,
        };
        set_restoring.set(true);

        let state_clone = state_for_restore.clone();
        let onload = {
            let file_reader = file_reader.clone();
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                let contents = file_reader
                    .result()
                    .ok()
                    .and_then(|value| value.as_string());

                let Some(contents) = contents else {
                    state_clone.push_toast("Failed to read backup file", ToastLevel::Error);
                    set_restoring.set(false);
                    return;
                };

                let state_inner = state_clone.clone();
                spawn_local(async move {
                    match api::restore_backup(&contents).await {
                        Ok(()) => {
                            state_inner
                                .push_toast("Backup restored successfully", ToastLevel::Success);
                            controller::full_refresh(&state_inner).await;
                        }
                        Err(e) => {
                            state_inner.push_toast(&e.to_string(), ToastLevel::Error);
                        }
                    }
                    set_restoring.set(false);
                });
            }) as Box<dyn FnMut(_)>)
        };

        file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let _ = file_reader.read_as_text(&file);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Data Management"</h2>

            <div class="space-y-4">
                // Backup download
                <div class="flex items-center justify-between p-4 bg-gray-700 rounded-lg">
                    <div>
                        <h3 class="font-medium">"Download Backup"</h3>
                        <p class="text-sm text-gray-400">"Save the server configuration as JSON"</p>
                    </div>
                    <button
                        on:click=download_backup
                        disabled=move || downloading.get()
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if downloading.get() { "Preparing..." } else { "Download" }}
                    </button>
                </div>

                // Backup restore
                <div class="p-4 bg-gray-700 rounded-lg">
                    <div class="mb-3">
                        <h3 class="font-medium">"Restore Backup"</h3>
                        <p class="text-sm text-gray-400">"Upload a previously downloaded backup file"</p>
                    </div>

                    <label
                        class="flex items-center justify-center px-4 py-3 bg-gray-600
                               hover:bg-gray-500 rounded-lg cursor-pointer transition-colors
                               border-2 border-dashed border-gray-500 hover:border-primary-500"
                    >
                        <input
                            type="file"
                            accept=".json"
                            class="hidden"
                            on:change=handle_file_upload
                            disabled=move || restoring.get()
                        />
                        <span class="flex items-center gap-2">
                            {move || if restoring.get() {
                                view! { <span class="loading-spinner w-4 h-4" /> }.into_view()
                            } else {
                                view! { <span>"📁"</span> }.into_view()
                            }}
                            {move || if restoring.get() {
                                "Restoring..."
                            } else {
                                "Choose backup file"
                            }}
                        </span>
                    </label>
                </div>
            </div>
        </section>
    }
}

/// Build a blob download and click a transient anchor for it
fn trigger_download(contents: &str, filename: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };

    let parts = js_sys::Array::of1(&contents.into());
    let Ok(blob) = web_sys::Blob::new_with_str_sequence(&parts) else {
        return false;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return false;
    };

    let clicked = document
        .create_element("a")
        .ok()
        .and_then(|anchor| {
            anchor.set_attribute("href", &url).ok()?;
            anchor.set_attribute("download", filename).ok()?;
            anchor.dyn_ref::<web_sys::HtmlElement>()?.click();
            Some(())
        })
        .is_some();

    let _ = web_sys::Url::revoke_object_url(&url);
    clicked
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "Xray Dashboard manages proxy profiles on an Xray server: "
                    "provision clients, share connection links and QR codes, and "
                    "keep an eye on traffic."
                </p>

                <p class="text-sm text-gray-400">
                    "Version 0.1.0 • Built with Leptos"
                </p>
            </div>
        </section>
    }
}
