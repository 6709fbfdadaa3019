//! Xray Dashboard
//!
//! Browser dashboard for an Xray proxy server, built with Leptos (WASM).
//!
//! # Features
//!
//! - Proxy profile management (create, list, delete)
//! - Aggregate server statistics with periodic refresh
//! - QR codes for connection links
//! - Backup download and restore
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistent state lives in an external FastAPI backend;
//! this crate is the HTTP client, reactive view state, and rendering layer
//! on top of it.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod utils;
