//! Browser-side behavior tests (wasm32 only).
//!
//! Run with `wasm-pack test --headless --chrome` or
//! `cargo test --target wasm32-unknown-unknown`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::SignalGetUntracked;
use wasm_bindgen_test::*;

use xray_dashboard::state::global::{GlobalState, ToastLevel};
use xray_dashboard::utils::Debounce;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn debounce_invokes_once_after_window_elapses() {
    let hits = Rc::new(Cell::new(0u32));
    let debounce = Debounce::new(50);

    // Burst of calls, each within the wait window of the previous one
    for _ in 0..5 {
        let hits = Rc::clone(&hits);
        debounce.call(move || hits.set(hits.get() + 1));
        TimeoutFuture::new(10).await;
    }

    // Still pending: the window restarts on every call
    assert_eq!(hits.get(), 0);

    TimeoutFuture::new(120).await;
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
async fn debounce_cancel_drops_pending_invocation() {
    let hits = Rc::new(Cell::new(0u32));
    let debounce = Debounce::new(30);

    {
        let hits = Rc::clone(&hits);
        debounce.call(move || hits.set(hits.get() + 1));
    }
    debounce.cancel();

    TimeoutFuture::new(80).await;
    assert_eq!(hits.get(), 0);
}

#[wasm_bindgen_test]
async fn debounce_later_call_replaces_earlier_one() {
    let seen = Rc::new(Cell::new(0u32));
    let debounce = Debounce::new(30);

    {
        let seen = Rc::clone(&seen);
        debounce.call(move || seen.set(1));
    }
    {
        let seen = Rc::clone(&seen);
        debounce.call(move || seen.set(2));
    }

    TimeoutFuture::new(80).await;
    assert_eq!(seen.get(), 2);
}

#[wasm_bindgen_test]
async fn toast_fades_then_removes_after_duration() {
    let runtime = leptos::create_runtime();
    let state = GlobalState::new();

    state.push_toast_with_duration("saved", ToastLevel::Success, 50);
    assert_eq!(state.toasts.get_untracked().len(), 1);
    assert!(!state.toasts.get_untracked()[0].leaving);

    // Past the duration but inside the fade window
    TimeoutFuture::new(150).await;
    if let Some(toast) = state.toasts.get_untracked().first() {
        assert!(toast.leaving);
    }

    // Fade complete, toast gone
    TimeoutFuture::new(400).await;
    assert!(state.toasts.get_untracked().is_empty());

    runtime.dispose();
}

#[wasm_bindgen_test]
async fn dismissed_toast_does_not_linger() {
    let runtime = leptos::create_runtime();
    let state = GlobalState::new();

    state.push_toast("oops", ToastLevel::Error);
    let id = state.toasts.get_untracked()[0].id;
    state.dismiss_toast(id);

    assert!(state.toasts.get_untracked().is_empty());

    // The expiry timer firing later must not panic or resurrect the toast
    TimeoutFuture::new(100).await;
    assert!(state.toasts.get_untracked().is_empty());

    runtime.dispose();
}
