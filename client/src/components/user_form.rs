//! "Opret bruger": create a user with a role.

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::components::form_message::{FormMessage, FormStatus};
use crate::net::api::error_message;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::task::spawn_browser;
use crate::util::validate;

#[component]
pub fn UserForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);

    let reset = move || {
        username.set(String::new());
        email.set(String::new());
        password.set(String::new());
        role.set(Role::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = match validate::validate_user(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            role.get_untracked(),
        ) {
            Ok(user) => user,
            Err(msg) => {
                status.set(Some(FormStatus::Error(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match auth.get_untracked().api().create_user(&user).await {
                Ok(()) => {
                    status.set(Some(FormStatus::Success("Brugeren blev oprettet!".to_owned())));
                    reset();
                }
                Err(e) => {
                    log::error!("create user failed: {e}");
                    status.set(Some(FormStatus::Error(error_message(
                        &e,
                        "Netværksfejl – kunne ikke oprette brugeren.",
                    ))));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="m-form" on:submit=on_submit>
            <h2 class="m-title">"Opret Bruger"</h2>
            <TextField label="Brugernavn" value=username/>
            <TextField label="Email" value=email kind="email"/>
            <TextField label="Kodeord" value=password kind="password"/>
            <label class="m-field">
                <span class="m-label">"Rolle"</span>
                <select
                    class="m-input"
                    prop:value=move || role.get().as_wire()
                    on:change=move |ev| {
                        if let Some(r) = Role::from_wire(&event_target_value(&ev)) {
                            role.set(r);
                        }
                    }
                >
                    {Role::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.as_wire()>{r.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <button class="m-submit" type="submit" disabled=move || busy.get()>
                "Opret Bruger"
            </button>
            <FormMessage status/>
        </form>
    }
}
