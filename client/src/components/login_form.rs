//! Username/password login shown in the overlay from the landing page.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::components::form_message::{FormMessage, FormStatus};
use crate::net::http::ApiError;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::task::spawn_browser;
use crate::util::{auth as session_actions, validate};

/// Text for a failed login. The backend's rejection is shown verbatim.
pub(crate) fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { body, .. } => format!("Login fejlede: {body}"),
        _ => "Netværksfejl – kunne ikke logge ind.".to_owned(),
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate::validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                status.set(Some(FormStatus::Error(msg.to_owned())));
                return;
            }
        };
        busy.set(true);

        spawn_browser(async move {
            let api = auth.get_untracked().api();
            match api.login(&request).await {
                Ok(Some(token)) => {
                    status.set(Some(FormStatus::Success("Login succes!".to_owned())));
                    session_actions::sign_in(auth, token);
                    ui.update(UiState::close_overlay);
                }
                Ok(None) => {
                    status.set(Some(FormStatus::Error("Login fejlede: intet token modtaget.".to_owned())));
                }
                Err(e) => {
                    log::error!("login failed: {e}");
                    status.set(Some(FormStatus::Error(login_failure_message(&e))));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="lm-form" on:submit=on_submit>
            <h2 class="m-title">"Login"</h2>
            <TextField label="Brugernavn" value=username/>
            <TextField label="Kodeord" value=password kind="password"/>
            <button class="m-submit" type="submit" disabled=move || busy.get()>
                "Login"
            </button>
            <FormMessage status/>
        </form>
    }
}
