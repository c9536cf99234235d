use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const NOW_MS: f64 = 1_700_000_000_000.0;

fn token(exp_secs: i64) -> String {
    let payload = serde_json::json!({ "exp": exp_secs, "sub": "lager" }).to_string();
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn dashboard_hidden_while_loading() {
    assert!(!should_show_dashboard(&AuthState::pending()));
}

#[test]
fn dashboard_hidden_when_signed_out() {
    assert!(!should_show_dashboard(&AuthState::default()));
}

#[test]
fn dashboard_shown_when_signed_in() {
    assert!(should_show_dashboard(&AuthState::signed_in(token(1_700_003_600))));
}

#[test]
fn session_valid_until_expiry() {
    let state = AuthState::signed_in(token(1_700_000_001));
    assert!(session_still_valid(&state, NOW_MS));
    assert!(!session_still_valid(&state, NOW_MS + 1_000.0));
}

#[test]
fn signed_out_session_is_not_valid() {
    assert!(!session_still_valid(&AuthState::default(), NOW_MS));
}
