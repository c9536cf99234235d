//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! and validation rules from component logic to improve reuse and
//! testability.

pub mod auth;
pub mod clock;
pub mod file;
pub mod format;
pub mod notify;
pub mod search;
pub mod storage;
pub mod task;
pub mod validate;
