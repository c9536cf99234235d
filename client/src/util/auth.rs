//! Shared session actions for components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every place that signs in, signs out, or re-checks the gate goes through
//! these helpers so the browser store and the `AuthState` signal never drift
//! apart.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::{self, BrowserTokenStore, TokenStore};
use crate::util::clock;

/// True once the store was consulted and a credential is present.
#[must_use]
pub fn should_show_dashboard(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Gate check for an already-restored session at `now_ms`.
#[must_use]
pub fn session_still_valid(state: &AuthState, now_ms: f64) -> bool {
    session::is_token_valid(state.token.as_deref(), now_ms)
}

/// Read the browser store once, evicting a dead credential.
///
/// Runs as an effect so server rendering and the first hydration pass both
/// see the pending state.
pub fn install_session_restore(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        if auth.with_untracked(|s| s.loading) {
            auth.set(AuthState::restore(&BrowserTokenStore, clock::now_ms()));
        }
    });
}

/// Persist `token` and switch the session to signed in.
pub fn sign_in(auth: RwSignal<AuthState>, token: String) {
    BrowserTokenStore.save(&token);
    auth.set(AuthState::signed_in(token));
}

/// Drop the credential everywhere.
pub fn sign_out(auth: RwSignal<AuthState>) {
    BrowserTokenStore.clear();
    auth.set(AuthState::default());
}

/// Re-check the gate before acting; sign out and return `false` on expiry.
pub fn ensure_session(auth: RwSignal<AuthState>) -> bool {
    let valid = auth.with_untracked(|s| session_still_valid(s, clock::now_ms()));
    if !valid {
        log::info!("session expired, returning to landing page");
        sign_out(auth);
    }
    valid
}
