//! Signed-in header: logo, product search, user, and "Log ud".

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::consts::LOGO_PATH;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::sign_out;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| {
        ui.update(UiState::close_overlay);
        sign_out(auth);
    };

    view! {
        <div class="db-wrapper">
            <header class="db-header">
                <img class="lp-logo" src=LOGO_PATH alt="Elvang"/>
                <SearchBar/>
                <span class="db-user">{move || auth.get().subject.unwrap_or_default()}</span>
                <button class="logout-btn" on:click=on_logout>
                    "Log ud"
                </button>
            </header>
        </div>
    }
}
