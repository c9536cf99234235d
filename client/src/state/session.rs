//! Session gate: decides whether a stored bearer credential is still usable.
//!
//! DESIGN
//! ======
//! The validity check is a pure predicate over the token string and a clock
//! reading. Removing a bad credential from storage is a separate, explicit
//! action (`evict_if_invalid`) that only the application boundary calls.
//! Storage access goes through `TokenStore` so the gate can be exercised
//! without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Deserializer};

use crate::consts::TOKEN_STORAGE_KEY;
use crate::util::storage;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Reasons a credential cannot be decoded. All of them make it invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token must have 3 dot-delimited parts, found {0}")]
    Segments(usize),
    #[error("token payload is not valid base64: {0}")]
    Base64(String),
    #[error("token payload is not valid JSON: {0}")]
    Json(String),
}

/// Claims read from the token payload. Unknown claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_expiry")]
    pub exp: Option<f64>,
    /// Subject, normally the username. Non-string subjects are dropped.
    #[serde(default, deserialize_with = "deserialize_subject")]
    pub sub: Option<String>,
}

impl TokenClaims {
    /// Expiry converted to milliseconds.
    #[must_use]
    pub fn expires_at_ms(&self) -> Option<f64> {
        self.exp.map(|secs| secs * 1000.0)
    }

    /// True iff `now_ms` is strictly before the expiry. No expiry means dead.
    #[must_use]
    pub fn is_live_at(&self, now_ms: f64) -> bool {
        self.expires_at_ms().is_some_and(|exp_ms| now_ms < exp_ms)
    }
}

/// `exp` arrives as a JSON number, or occasionally as a numeric string.
fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// The subject is display-only; any non-string shape reads as absent.
fn deserialize_subject<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Decode the middle segment of a three-part token into its claims.
///
/// # Errors
///
/// Returns a `TokenError` when the token does not have exactly three parts or
/// its payload is not base64-encoded JSON.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = parts.as_slice() else {
        return Err(TokenError::Segments(parts.len()));
    };

    let bytes = STANDARD_LENIENT
        .decode(payload)
        .or_else(|_| URL_SAFE_LENIENT.decode(payload))
        .map_err(|e| TokenError::Base64(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// Pure validity check: present, decodable, and not yet expired at `now_ms`.
pub fn is_token_valid(token: Option<&str>, now_ms: f64) -> bool {
    let Some(token) = token else {
        return false;
    };
    match decode_claims(token) {
        Ok(claims) => claims.is_live_at(now_ms),
        Err(e) => {
            log::error!("Invalid token: {e}");
            false
        }
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Persistent home of the credential.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        storage::load_string(TOKEN_STORAGE_KEY)
    }

    fn save(&self, token: &str) {
        storage::save_string(TOKEN_STORAGE_KEY, token);
    }

    fn clear(&self) {
        storage::remove(TOKEN_STORAGE_KEY);
    }
}

/// In-memory store for tests and non-browser rendering.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Remove the stored credential if it is no longer usable.
///
/// Returns the credential that survived the check, if any.
pub fn evict_if_invalid(store: &impl TokenStore, now_ms: f64) -> Option<String> {
    let token = store.load()?;
    if is_token_valid(Some(&token), now_ms) {
        Some(token)
    } else {
        store.clear();
        None
    }
}
