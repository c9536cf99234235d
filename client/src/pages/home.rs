//! Root route: landing page when signed out, dashboard when signed in.
//!
//! The switch follows the session context, so logging in or out never
//! reloads the page.

use leptos::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::state::auth::AuthState;
use crate::util::auth::should_show_dashboard;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || auth.with(should_show_dashboard)
            fallback=|| view! { <LandingPage/> }
        >
            <DashboardPage/>
        </Show>
    }
}
