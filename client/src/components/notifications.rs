//! Toast stack fed by `util::notify`.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Notifications() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notification-container">
            <For
                each=move || ui.with(|s| s.notices.clone())
                key=|n| n.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.css_class() on:click=move |_| ui.update(|s| s.dismiss(id))>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
