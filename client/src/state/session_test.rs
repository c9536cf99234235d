use super::*;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

// =============================================================
// Helpers
// =============================================================

const NOW_MS: f64 = 1_700_000_000_000.0;
const NOW_SECS: i64 = 1_700_000_000;

fn token_with_payload(payload: &serde_json::Value) -> String {
    format!("header.{}.signature", STANDARD.encode(payload.to_string()))
}

fn token_expiring_at(exp_secs: i64) -> String {
    token_with_payload(&serde_json::json!({ "exp": exp_secs, "sub": "lager" }))
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_claims_reads_exp_and_sub() {
    let claims = decode_claims(&token_expiring_at(NOW_SECS)).unwrap();
    assert_eq!(claims.exp, Some(1_700_000_000.0));
    assert_eq!(claims.sub.as_deref(), Some("lager"));
}

#[test]
fn decode_claims_accepts_url_safe_unpadded_payload() {
    let payload = serde_json::json!({ "exp": NOW_SECS, "sub": "å?>" }).to_string();
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("å?>"));
}

#[test]
fn decode_claims_accepts_numeric_string_exp() {
    let token = token_with_payload(&serde_json::json!({ "exp": "1700000000" }));
    assert_eq!(decode_claims(&token).unwrap().exp, Some(1_700_000_000.0));
}

#[test]
fn decode_claims_ignores_non_numeric_exp() {
    let token = token_with_payload(&serde_json::json!({ "exp": "soon" }));
    assert_eq!(decode_claims(&token).unwrap().exp, None);
}

#[test]
fn decode_claims_rejects_single_segment() {
    assert_eq!(decode_claims("only-one-part"), Err(TokenError::Segments(1)));
}

#[test]
fn decode_claims_rejects_four_segments() {
    assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Segments(4)));
}

#[test]
fn decode_claims_rejects_invalid_base64() {
    assert!(matches!(decode_claims("header.%%%%.signature"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let token = format!("header.{}.signature", STANDARD.encode("not json"));
    assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
}

// =============================================================
// is_token_valid
// =============================================================

#[test]
fn absent_token_is_invalid() {
    assert!(!is_token_valid(None, NOW_MS));
}

#[test]
fn future_expiry_is_valid() {
    assert!(is_token_valid(Some(&token_expiring_at(NOW_SECS + 3600)), NOW_MS));
}

#[test]
fn past_expiry_is_invalid() {
    assert!(!is_token_valid(Some(&token_expiring_at(NOW_SECS - 3600)), NOW_MS));
}

#[test]
fn expiry_exactly_now_is_invalid() {
    assert!(!is_token_valid(Some(&token_expiring_at(NOW_SECS)), NOW_MS));
}

#[test]
fn one_millisecond_before_expiry_is_valid() {
    assert!(is_token_valid(Some(&token_expiring_at(NOW_SECS)), NOW_MS - 1.0));
}

#[test]
fn missing_exp_is_invalid() {
    let token = token_with_payload(&serde_json::json!({ "user": "test" }));
    assert!(!is_token_valid(Some(&token), NOW_MS));
}

#[test]
fn malformed_token_is_invalid() {
    assert!(!is_token_valid(Some("invalid.token.format"), NOW_MS));
    assert!(!is_token_valid(Some("header.not-valid-base64.signature"), NOW_MS));
    assert!(!is_token_valid(Some(""), NOW_MS));
}

#[test]
fn far_future_expiry_is_valid() {
    assert!(is_token_valid(Some(&token_expiring_at(NOW_SECS + 999_999_999)), NOW_MS));
}

// =============================================================
// evict_if_invalid
// =============================================================

#[test]
fn evict_keeps_live_token() {
    let token = token_expiring_at(NOW_SECS + 3600);
    let store = MemoryTokenStore::with_token(&token);
    assert_eq!(evict_if_invalid(&store, NOW_MS), Some(token.clone()));
    assert_eq!(store.load(), Some(token));
}

#[test]
fn evict_keeps_live_token_with_non_string_subject() {
    for sub in [serde_json::json!(42), serde_json::json!({ "id": 7 }), serde_json::json!(true)] {
        let token = token_with_payload(&serde_json::json!({ "exp": NOW_SECS + 3600, "sub": sub }));
        let store = MemoryTokenStore::with_token(&token);
        assert!(is_token_valid(Some(&token), NOW_MS));
        assert_eq!(evict_if_invalid(&store, NOW_MS), Some(token.clone()));
        assert_eq!(store.load(), Some(token));
    }
}

#[test]
fn decode_claims_drops_non_string_subject() {
    let token = token_with_payload(&serde_json::json!({ "exp": NOW_SECS, "sub": 42 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub, None);
    assert_eq!(claims.exp, Some(1_700_000_000.0));
}

#[test]
fn evict_removes_expired_token() {
    let store = MemoryTokenStore::with_token(&token_expiring_at(NOW_SECS - 3600));
    assert_eq!(evict_if_invalid(&store, NOW_MS), None);
    assert_eq!(store.load(), None);
}

#[test]
fn evict_removes_malformed_token() {
    let store = MemoryTokenStore::with_token("only-one-part");
    assert_eq!(evict_if_invalid(&store, NOW_MS), None);
    assert_eq!(store.load(), None);
}

#[test]
fn evict_on_empty_store_is_none() {
    let store = MemoryTokenStore::default();
    assert_eq!(evict_if_invalid(&store, NOW_MS), None);
}

#[test]
fn pure_check_never_touches_store() {
    let store = MemoryTokenStore::with_token("only-one-part");
    assert!(!is_token_valid(store.load().as_deref(), NOW_MS));
    assert_eq!(store.load().as_deref(), Some("only-one-part"));
}

// =============================================================
// End-to-end against the real clock
// =============================================================

#[test]
fn stored_token_valid_for_next_hour_persists() {
    let now = crate::util::clock::now_ms();
    #[allow(clippy::cast_possible_truncation)]
    let exp = (now / 1000.0) as i64 + 3600;
    let store = MemoryTokenStore::with_token(&token_expiring_at(exp));
    assert!(evict_if_invalid(&store, now).is_some());
    assert!(store.load().is_some());
}

#[test]
fn stored_token_expired_an_hour_ago_is_removed() {
    let now = crate::util::clock::now_ms();
    #[allow(clippy::cast_possible_truncation)]
    let exp = (now / 1000.0) as i64 - 3600;
    let store = MemoryTokenStore::with_token(&token_expiring_at(exp));
    assert!(evict_if_invalid(&store, now).is_none());
    assert!(store.load().is_none());
}
