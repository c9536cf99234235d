//! "Registrer ny leverance": record an incoming delivery.

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::components::form_message::{FormMessage, FormStatus};
use crate::net::api::error_message;
use crate::state::auth::AuthState;
use crate::util::format::delivery_summary;
use crate::util::task::spawn_browser;
use crate::util::validate;

#[component]
pub fn DeliveryForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let date = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let carrier = RwSignal::new(String::new());
    let tracking = RwSignal::new(String::new());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);

    let summary = move || {
        let (d, a, c, t) = (date.get(), address.get(), carrier.get(), tracking.get());
        if [&d, &a, &c, &t].iter().all(|v| v.trim().is_empty()) {
            "Leveringsoversigt vises her...".to_owned()
        } else {
            delivery_summary(&d, &a, &c, &t)
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let delivery = match validate::validate_delivery(
            &date.get_untracked(),
            &address.get_untracked(),
            &carrier.get_untracked(),
            &tracking.get_untracked(),
        ) {
            Ok(delivery) => delivery,
            Err(msg) => {
                status.set(Some(FormStatus::Error(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            let result = auth.get_untracked().api().create_delivery(&delivery).await;
            status.set(Some(match result {
                Ok(()) => FormStatus::Success("Leveringen blev oprettet!".to_owned()),
                Err(e) => {
                    log::error!("create delivery failed: {e}");
                    FormStatus::Error(error_message(&e, "Netværksfejl – kunne ikke oprette levering."))
                }
            }));
            busy.set(false);
        });
    };

    view! {
        <form class="dm-form" on:submit=on_submit>
            <h2 class="m-title">"Opret Levering"</h2>
            <div class="m-content">
                <div class="m-fields">
                    <TextField label="Leveringsdato" value=date kind="date"/>
                    <TextField label="Adresse" value=address/>
                    <TextField label="Fragtfirma" value=carrier/>
                    <TextField label="Trackingnummer" value=tracking/>
                </div>
                <div class="dm-preview-container">
                    <div class="dm-preview">{summary}</div>
                </div>
            </div>
            <button class="m-submit" type="submit" disabled=move || busy.get()>
                "Opret Levering"
            </button>
            <FormMessage status/>
        </form>
    }
}
