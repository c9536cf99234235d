//! "Opret produkt": create a product with an optional picture upload.

use leptos::prelude::*;

use crate::components::form_field::{TextAreaField, TextField};
use crate::components::form_message::{FormMessage, FormStatus};
use crate::consts::DEFAULT_PICTURE;
use crate::net::api::error_message;
use crate::state::auth::AuthState;
use crate::util::task::spawn_browser;
use crate::util::validate;

#[component]
pub fn ProductForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let picture = RwSignal::new(None::<String>);
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);

    let on_picture = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                picture.set(None);
                return;
            };
            spawn_browser(async move {
                match crate::util::file::read_as_data_url(&file).await {
                    Ok(url) => picture.set(Some(url)),
                    Err(e) => {
                        log::error!("could not read picture: {e}");
                        picture.set(None);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        drop(ev);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let chosen = picture.get_untracked();
        let product = match validate::validate_product(
            &name.get_untracked(),
            &description.get_untracked(),
            &price.get_untracked(),
            &sku.get_untracked(),
            chosen.as_deref(),
        ) {
            Ok(product) => product,
            Err(msg) => {
                status.set(Some(FormStatus::Error(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            let result = auth.get_untracked().api().create_product(&product).await;
            status.set(Some(match result {
                Ok(()) => FormStatus::Success("Produktet blev oprettet!".to_owned()),
                Err(e) => {
                    log::error!("create product failed: {e}");
                    FormStatus::Error(error_message(&e, "Netværksfejl – kunne ikke oprette produktet."))
                }
            }));
            busy.set(false);
        });
    };

    view! {
        <form class="m-form" on:submit=on_submit>
            <h2 class="m-title">"Opret Produkt"</h2>
            <div class="m-content">
                <div class="m-fields">
                    <TextField label="Navn" value=name/>
                    <TextAreaField label="Beskrivelse" value=description/>
                    <TextField label="SKU" value=sku/>
                    <TextField label="Pris" value=price kind="number"/>
                    <label class="m-field">
                        <span class="m-label">"Billede"</span>
                        <input class="m-input" type="file" accept="image/*" on:change=on_picture/>
                    </label>
                </div>
                <div class="m-preview-container">
                    <img
                        class="m-preview"
                        alt="Forhåndsvisning"
                        src=move || picture.get().unwrap_or_else(|| DEFAULT_PICTURE.to_owned())
                    />
                </div>
            </div>
            <button class="m-submit" type="submit" disabled=move || busy.get()>
                "Opret Produkt"
            </button>
            <FormMessage status/>
        </form>
    }
}
