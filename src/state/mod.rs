//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single in-memory source of truth for authentication and
//! payment status; `access` is the pure decision layer that turns that state
//! plus per-route requirements into a navigation outcome.

pub mod access;
pub mod session;
