//! Debounce
//!
//! Delays work until no further calls arrive within a wait window.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// A debouncer over a single timeout slot.
///
/// Each `call` cancels any pending invocation and schedules the new one
/// after the wait window; only the last call within a burst runs.
#[derive(Clone)]
pub struct Debounce {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `f`, replacing any pending invocation
    pub fn call<F: FnOnce() + 'static>(&self, f: F) {
        let slot = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.wait_ms, move || {
            slot.borrow_mut().take();
            f();
        });

        if let Some(previous) = self.pending.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    }

    /// Drop the pending invocation, if any
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.cancel();
        }
    }
}
