//! API Layer
//!
//! HTTP client for the backend REST API.

pub mod client;

pub use client::*;
