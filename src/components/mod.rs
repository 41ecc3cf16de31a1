//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and the route guard while
//! reading/writing shared state from Leptos context providers.

pub mod footer;
pub mod navbar;
pub mod protected;
pub mod toaster;
