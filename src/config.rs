//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base address is baked in at compile time so the deployed bundle
//! carries no runtime configuration fetch. Relative endpoint paths are
//! resolved against this base by the request gateway.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback API base when `WORKFLOW_API_BASE` is unset at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Base address for relative API paths.
pub fn api_base() -> &'static str {
    option_env!("WORKFLOW_API_BASE").unwrap_or(DEFAULT_API_BASE)
}
