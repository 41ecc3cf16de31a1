//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notify`) so consumers depend on
//! small focused stores handed down via context rather than an ambient
//! singleton.

pub mod notify;
pub mod session;
