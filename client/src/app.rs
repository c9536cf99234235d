//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notifications::Notifications;
use crate::components::overlay::Overlay;
use crate::pages::home::HomePage;
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::install_session_restore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="da">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, restores the stored credential once
/// in the browser, and mounts the overlay and notification layers above the
/// routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    install_session_restore(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/lagerstyring.css"/>
        <Title text="Elvang Lagerstyring"/>

        <Router>
            <main id="app">
                <Routes fallback=|| view! { <HomePage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
        <Overlay/>
        <Notifications/>
    }
}
