//! Product detail page: per-warehouse stock, edit, and delete.
//!
//! Opened from a search hit or a product card. Edits send only the changed
//! fields; delete asks for confirmation and closes the overlay afterwards.

#[cfg(test)]
#[path = "product_page_test.rs"]
mod product_page_test;

use leptos::prelude::*;

use crate::components::form_field::{TextAreaField, TextField};
use crate::components::form_message::{FormMessage, FormStatus};
use crate::net::api::error_message;
use crate::net::types::{Product, WarehouseProduct};
use crate::state::auth::AuthState;
use crate::state::ui::{NoticeKind, UiState};
use crate::util::format::{format_price, resolve_picture_src};
use crate::util::notify::show_notification;
use crate::util::task::spawn_browser;
use crate::util::validate;

/// Stock rows for `product_id`, largest holding first.
pub(crate) fn stock_for_product(rows: Vec<WarehouseProduct>, product_id: i64) -> Vec<WarehouseProduct> {
    let mut mine: Vec<_> = rows
        .into_iter()
        .filter(|r| r.product.id == Some(product_id))
        .collect();
    mine.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.warehouse.name.cmp(&b.warehouse.name)));
    mine
}

pub(crate) fn total_quantity(rows: &[WarehouseProduct]) -> i64 {
    rows.iter().map(|r| r.quantity).sum()
}

fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

#[component]
pub fn ProductPage(product_id: i64) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let product = RwSignal::new(None::<Product>);
    let stock = RwSignal::new(Vec::<WarehouseProduct>::new());
    let load_failed = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let status = RwSignal::new(None::<FormStatus>);
    let busy = RwSignal::new(false);

    let fill_form = move |p: &Product| {
        name.set(p.name.clone());
        description.set(p.description.clone());
        price.set(p.price.to_string());
    };

    Effect::new(move || {
        let api = auth.get_untracked().api();
        spawn_browser(async move {
            match api.get_product(product_id).await {
                Ok(p) => {
                    fill_form(&p);
                    product.set(Some(p));
                }
                Err(e) => {
                    log::error!("product {product_id} load failed: {e}");
                    load_failed.set(true);
                    return;
                }
            }
            match api.list_warehouse_products().await {
                Ok(rows) => stock.set(stock_for_product(rows, product_id)),
                Err(e) => log::warn!("stock load for product {product_id} failed: {e}"),
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(current) = product.get_untracked() else {
            return;
        };
        let patch = match validate::validate_product_patch(
            &current,
            &name.get_untracked(),
            &description.get_untracked(),
            &price.get_untracked(),
        ) {
            Ok(patch) => patch,
            Err(msg) => {
                status.set(Some(FormStatus::Error(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match auth.get_untracked().api().update_product(product_id, &patch).await {
                Ok(()) => {
                    let updated = Product {
                        name: patch.name.unwrap_or(current.name),
                        description: patch.description.unwrap_or(current.description),
                        price: patch.price.unwrap_or(current.price),
                        ..current
                    };
                    fill_form(&updated);
                    product.set(Some(updated));
                    status.set(Some(FormStatus::Success("Produktet blev opdateret!".to_owned())));
                }
                Err(e) => {
                    log::error!("update product {product_id} failed: {e}");
                    status.set(Some(FormStatus::Error(error_message(
                        &e,
                        "Netværksfejl – kunne ikke opdatere produktet.",
                    ))));
                }
            }
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        let label = product.with_untracked(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default());
        if !confirm(&format!("Slet produktet \"{label}\"?")) {
            return;
        }
        busy.set(true);
        spawn_browser(async move {
            match auth.get_untracked().api().delete_product(product_id).await {
                Ok(()) => {
                    ui.update(UiState::close_overlay);
                    show_notification(ui, NoticeKind::Success, "Produktet blev slettet.");
                }
                Err(e) => {
                    log::error!("delete product {product_id} failed: {e}");
                    status.set(Some(FormStatus::Error(error_message(
                        &e,
                        "Netværksfejl – kunne ikke slette produktet.",
                    ))));
                    busy.set(false);
                }
            }
        });
    };

    let header = move || {
        product.get().map(|p| {
            let src = resolve_picture_src(p.picture.as_deref());
            view! {
                <div class="pp-header">
                    <img class="pp-img" src=src alt=p.name.clone()/>
                    <div class="pp-info">
                        <h2 class="dm-title">{p.name.clone()}</h2>
                        <div class="product-sku">{format!("SKU: {}", p.sku)}</div>
                        <div class="product-price">{format_price(p.price)}</div>
                    </div>
                </div>
            }
        })
    };

    let stock_rows = move || {
        let rows = stock.get();
        if rows.is_empty() {
            return view! { <div class="m-empty">"Ingen lagerbeholdning registreret."</div> }.into_any();
        }
        let total = total_quantity(&rows);
        view! {
            <table class="m-table">
                <thead>
                    <tr>
                        <th>"Varehus"</th>
                        <th>"Antal"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|r| view! { <tr><td>{r.warehouse.name}</td><td>{r.quantity}</td></tr> })
                        .collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td>"I alt"</td>
                        <td>{total}</td>
                    </tr>
                </tfoot>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="dm-form product-page">
            <Show
                when=move || !load_failed.get()
                fallback=|| view! { <div class="m-message m-error">"Kunne ikke hente produktet."</div> }
            >
                {header}
                <h3>"Lagerbeholdning"</h3>
                {stock_rows}
                <form class="m-form pp-edit" on:submit=on_save>
                    <h3>"Rediger produkt"</h3>
                    <TextField label="Navn" value=name/>
                    <TextAreaField label="Beskrivelse" value=description/>
                    <TextField label="Pris" value=price kind="number"/>
                    <div class="pp-actions">
                        <button class="m-submit" type="submit" disabled=move || busy.get()>
                            "Gem ændringer"
                        </button>
                        <button class="m-danger" type="button" on:click=on_delete disabled=move || busy.get()>
                            "Slet produkt"
                        </button>
                    </div>
                    <FormMessage status/>
                </form>
            </Show>
        </div>
    }
}
