//! "Flyt produkt til lager": move stock between two warehouses.
//!
//! The source stock line follows the product and source selections and is
//! refreshed after every successful transfer.

#[cfg(test)]
#[path = "transfer_form_test.rs"]
mod transfer_form_test;

use leptos::prelude::*;

use crate::components::form_field::{SelectField, SelectOptions, TextField};
use crate::components::form_message::{FormMessage, FormStatus};
use crate::net::api::error_message;
use crate::state::auth::AuthState;
use crate::util::format::{StockReading, format_stock_display};
use crate::util::task::spawn_browser;
use crate::util::validate;

/// `(product, source warehouse)` ids when both dropdowns hold a number.
pub(crate) fn stock_selection(product_id: &str, from_id: &str) -> Option<(i64, i64)> {
    match (product_id.parse(), from_id.parse()) {
        (Ok(product), Ok(warehouse)) => Some((product, warehouse)),
        _ => None,
    }
}

#[component]
pub fn TransferForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let products = RwSignal::new(SelectOptions::new());
    let warehouses = RwSignal::new(SelectOptions::new());
    let product_id = RwSignal::new(String::new());
    let from_id = RwSignal::new(String::new());
    let to_id = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let stock = RwSignal::new(StockReading::default());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let api = auth.get_untracked().api();
        spawn_browser(async move {
            let loaded = async {
                let p = api.list_products().await?;
                let w = api.list_warehouses().await?;
                Ok::<_, crate::net::http::ApiError>((p, w))
            };
            match loaded.await {
                Ok((p, w)) => {
                    products.set(p.into_iter().map(|p| (p.id.to_string(), p.name)).collect());
                    warehouses.set(w.into_iter().map(|w| (w.id.to_string(), w.name)).collect());
                }
                Err(e) => {
                    log::error!("transfer form data failed: {e}");
                    status.set(Some(FormStatus::Error("Kunne ikke hente data fra server.".to_owned())));
                }
            }
        });
    });

    let current_selection = move || stock_selection(&product_id.get_untracked(), &from_id.get_untracked());

    let refresh_stock = move || {
        let Some(issued @ (product, warehouse)) = current_selection() else {
            stock.set(StockReading::Unselected);
            return;
        };
        let api = auth.get_untracked().api();
        spawn_browser(async move {
            let reading = match api.stock_quantity(warehouse, product).await {
                Ok(q) => StockReading::Known(q),
                Err(e) => {
                    log::warn!("stock lookup failed: {e}");
                    StockReading::Unavailable
                }
            };
            if current_selection() == Some(issued) {
                stock.set(reading);
            }
        });
    };

    Effect::new(move || {
        product_id.track();
        from_id.track();
        refresh_stock();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate::validate_transfer(
            &product_id.get_untracked(),
            &from_id.get_untracked(),
            &to_id.get_untracked(),
            &amount.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                status.set(Some(FormStatus::Error(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match auth.get_untracked().api().transfer(&request).await {
                Ok(()) => {
                    status.set(Some(FormStatus::Success("Produktet blev flyttet!".to_owned())));
                    amount.set(String::new());
                    refresh_stock();
                }
                Err(e) => {
                    log::error!("transfer failed: {e}");
                    status.set(Some(FormStatus::Error(error_message(
                        &e,
                        "Netværksfejl – kunne ikke flytte produktet.",
                    ))));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="m-form" on:submit=on_submit>
            <h2 class="m-title">"Flyt produkt mellem lagre"</h2>
            <SelectField label="Produkt" placeholder="Vælg produkt..." value=product_id options=products/>
            <SelectField label="Fra varehus" placeholder="Vælg varehus..." value=from_id options=warehouses/>
            <SelectField label="Til varehus" placeholder="Vælg varehus..." value=to_id options=warehouses/>
            <TextField label="Antal" value=amount kind="number"/>
            <div class="m-stock-display">{move || format_stock_display(stock.get())}</div>
            <button class="m-submit" type="submit" disabled=move || busy.get()>
                "Flyt produkt"
            </button>
            <FormMessage status/>
        </form>
    }
}
