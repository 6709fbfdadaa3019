//! Clipboard Copy
//!
//! Async clipboard API with a hidden-textarea fallback. Both paths report
//! the outcome through a toast.

use leptos::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::global::{GlobalState, ToastLevel};

/// Copy `text` to the clipboard, toasting success or failure
pub fn copy_to_clipboard(state: GlobalState, text: String) {
    match clipboard_api() {
        Some(clipboard) => {
            spawn_local(async move {
                let promise = clipboard.write_text(&text);
                match wasm_bindgen_futures::JsFuture::from(promise).await {
                    Ok(_) => state.push_toast("Copied to clipboard!", ToastLevel::Success),
                    // Permission denied or insecure context
                    Err(_) => fallback_copy(&state, &text),
                }
            });
        }
        None => fallback_copy(&state, &text),
    }
}

/// The async clipboard API, if the browser exposes one
fn clipboard_api() -> Option<web_sys::Clipboard> {
    let navigator = web_sys::window()?.navigator();
    let value = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() {
        return None;
    }
    value.dyn_into::<web_sys::Clipboard>().ok()
}

fn fallback_copy(state: &GlobalState, text: &str) {
    if textarea_copy(text).unwrap_or(false) {
        state.push_toast("Copied to clipboard!", ToastLevel::Success);
    } else {
        state.push_toast("Failed to copy", ToastLevel::Error);
    }
}

/// Select the text inside an invisible textarea and issue a copy command
fn textarea_copy(text: &str) -> Option<bool> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let body = document.body()?;

    let textarea: web_sys::HtmlTextAreaElement =
        document.create_element("textarea").ok()?.dyn_into().ok()?;
    textarea.set_value(text);

    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");

    body.append_child(&textarea).ok()?;
    textarea.select();

    let html_document: web_sys::HtmlDocument = document.dyn_into().ok()?;
    let copied = html_document.exec_command("copy").unwrap_or(false);

    let _ = body.remove_child(&textarea);
    Some(copied)
}
