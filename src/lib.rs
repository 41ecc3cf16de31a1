//! # workflow-client
//!
//! Leptos + WASM front-end for the WorkFlow Pro workforce-management
//! product: role-based views (Employee, HR, Admin) for tracking work hours,
//! managing employee records, and processing payroll against a REST backend.
//!
//! The session/authorization core lives in `state::session` (persisted
//! session store), `net::gateway` (bearer-injecting request gateway),
//! `net::auth` (credential lifecycle), and `components::protected` (the
//! role-gated route guard). Pages and chrome consume those through context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the hydrated app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
