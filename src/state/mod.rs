//! State Management
//!
//! Global application state and the dashboard controller that mutates it.

pub mod controller;
pub mod global;

pub use global::{provide_global_state, GlobalState, Profile, Stats, SystemInfo, Toast, ToastLevel};
