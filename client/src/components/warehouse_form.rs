//! "Opret lager": create a warehouse.

use leptos::prelude::*;

use crate::components::form_field::{TextAreaField, TextField};
use crate::components::form_message::{FormMessage, FormStatus};
use crate::net::api::error_message;
use crate::state::auth::AuthState;
use crate::util::task::spawn_browser;
use crate::util::validate;

#[component]
pub fn WarehouseForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let warehouse = match validate::validate_warehouse(
            &name.get_untracked(),
            &description.get_untracked(),
            &address.get_untracked(),
        ) {
            Ok(warehouse) => warehouse,
            Err(msg) => {
                status.set(Some(FormStatus::Error(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            let result = auth.get_untracked().api().create_warehouse(&warehouse).await;
            status.set(Some(match result {
                Ok(()) => FormStatus::Success("Varehuset blev oprettet!".to_owned()),
                Err(e) => {
                    log::error!("create warehouse failed: {e}");
                    FormStatus::Error(error_message(&e, "Netværksfejl – kunne ikke oprette varehuset."))
                }
            }));
            busy.set(false);
        });
    };

    view! {
        <form class="m-form" on:submit=on_submit>
            <h2 class="m-title">"Opret varehus"</h2>
            <TextField label="Navn" value=name/>
            <TextAreaField label="Beskrivelse" value=description/>
            <TextField label="Adresse" value=address/>
            <button class="m-submit" type="submit" disabled=move || busy.get()>
                "Opret lager"
            </button>
            <FormMessage status/>
        </form>
    }
}
