//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the credential gate and its storage, `auth` is the reactive
//! session context built on it, and `ui` holds overlay and notification state.

pub mod auth;
pub mod session;
pub mod ui;
