use super::*;

// =============================================================
// Overlay
// =============================================================

#[test]
fn default_has_no_overlay_or_notices() {
    let state = UiState::default();
    assert!(state.overlay.is_none());
    assert!(state.notices.is_empty());
}

#[test]
fn open_replaces_current_panel() {
    let mut state = UiState::default();
    state.open(Panel::ProductList);
    state.open(Panel::Product(12));
    assert_eq!(state.overlay, Some(Panel::Product(12)));
    state.close_overlay();
    assert!(state.overlay.is_none());
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn notify_assigns_increasing_ids() {
    let mut state = UiState::default();
    let a = state.notify(NoticeKind::Error, "Netværksfejl");
    let b = state.notify(NoticeKind::Success, "Gemt");
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].message, "Netværksfejl");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = UiState::default();
    let a = state.notify(NoticeKind::Info, "a");
    let b = state.notify(NoticeKind::Info, "b");
    state.dismiss(a);
    assert_eq!(state.notices.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn ids_not_reused_after_dismiss() {
    let mut state = UiState::default();
    let a = state.notify(NoticeKind::Info, "a");
    state.dismiss(a);
    let b = state.notify(NoticeKind::Info, "b");
    assert_ne!(a, b);
}

#[test]
fn notice_kind_css_classes() {
    assert_eq!(NoticeKind::Error.css_class(), "notification notification-error");
    assert_eq!(NoticeKind::default(), NoticeKind::Info);
}
