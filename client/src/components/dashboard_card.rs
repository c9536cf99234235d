//! Clickable card on the dashboard grid.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{Panel, UiState};
use crate::util::auth::ensure_session;

/// Opens `panel` in the overlay after re-checking the session gate.
#[component]
pub fn DashboardCard(title: &'static str, panel: Panel) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        if !ensure_session(auth) {
            ui.update(UiState::close_overlay);
            return;
        }
        log::debug!("Kører: {title}");
        ui.update(|s| s.open(panel));
    };

    view! {
        <div class="dashboard-card" on:click=on_click>
            <h3>{title}</h3>
        </div>
    }
}
