//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<AuthState>`. Views take their
//! credential from here, never from storage. The lifecycle is: restored from
//! the store at startup (with one eviction pass), replaced on login, cleared
//! on logout or when the gate finds the credential expired.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::Api;
use crate::state::session::{self, TokenStore};

/// Authentication state tracking the current credential and loading status.
///
/// `loading` is true until the browser store has been consulted, so server
/// rendering and the first hydration pass agree on what to show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub subject: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// State before the browser store has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { token: None, subject: None, loading: true }
    }

    /// Restore from `store`, evicting a dead credential on the way.
    pub fn restore(store: &impl TokenStore, now_ms: f64) -> Self {
        match session::evict_if_invalid(store, now_ms) {
            Some(token) => Self::signed_in(token),
            None => Self::default(),
        }
    }

    /// State right after a successful login.
    #[must_use]
    pub fn signed_in(token: String) -> Self {
        let subject = session::decode_claims(&token).ok().and_then(|c| c.sub);
        Self { token: Some(token), subject, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Typed API client carrying this session's credential.
    #[must_use]
    pub fn api(&self) -> Api {
        Api::new(self.token.clone())
    }
}
