//! Networking modules for the warehouse REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` decorates requests with the session credential, `api` wraps each
//! backend endpoint in a typed call, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
