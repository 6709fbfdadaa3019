//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod profile_form;
pub mod profile_list;
pub mod qr_modal;
pub mod stats_grid;
pub mod toast;

pub use loading::{CardSkeleton, InlineLoading, ListSkeleton};
pub use nav::Nav;
pub use profile_form::ProfileForm;
pub use profile_list::ProfileList;
pub use qr_modal::QrModal;
pub use stats_grid::StatsGrid;
pub use toast::ToastStack;
