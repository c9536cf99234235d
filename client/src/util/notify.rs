//! Toast notifications with automatic dismissal.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};
use crate::util::task::spawn_browser;

/// Push a notification and schedule its removal.
///
/// Errors are shown like every other notice; nothing here reloads the page.
pub fn show_notification(ui: RwSignal<UiState>, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    if kind == NoticeKind::Error {
        log::warn!("{message}");
    }
    let mut id = 0;
    ui.update(|s| id = s.notify(kind, message));

    spawn_browser(async move {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(crate::consts::NOTIFICATION_MS))).await;
        ui.try_update(|s| s.dismiss(id));
    });
}
