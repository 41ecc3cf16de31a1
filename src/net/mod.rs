//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns base-address resolution and credential injection, `auth`
//! drives the session lifecycle, `api` exposes typed endpoint helpers, and
//! `types`/`error` define the shared wire schema and failure taxonomy.

pub mod api;
pub mod auth;
pub mod error;
pub mod gateway;
pub mod types;
