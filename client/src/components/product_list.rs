//! "Se alle produkter": product cards with total stock, fullest first.

#[cfg(test)]
#[path = "product_list_test.rs"]
mod product_list_test;

use leptos::prelude::*;

use crate::net::http::ApiError;
use crate::net::types::ProductSummary;
use crate::state::auth::AuthState;
use crate::state::ui::{NoticeKind, Panel, UiState};
use crate::util::format::{format_price, resolve_picture_src};
use crate::util::notify::show_notification;
use crate::util::task::spawn_browser;

/// Highest quantity first. Ties keep backend order reversed, as the list has
/// always shown them.
pub(crate) fn sort_by_quantity_desc(products: &mut [ProductSummary]) {
    products.sort_by_key(|p| p.quantity);
    products.reverse();
}

fn load_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { body, .. } => body.clone(),
        _ => "Netværksfejl - kunne ikke oprette forbindelse til backend".to_owned(),
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let products = RwSignal::new(None::<Vec<ProductSummary>>);
    let failed = RwSignal::new(false);

    Effect::new(move || {
        let api = auth.get_untracked().api();
        spawn_browser(async move {
            match api.list_product_summaries().await {
                Ok(mut list) => {
                    sort_by_quantity_desc(&mut list);
                    products.set(Some(list));
                }
                Err(e) => {
                    failed.set(true);
                    show_notification(ui, NoticeKind::Error, load_failure_message(&e));
                }
            }
        });
    });

    let cards = move || {
        let Some(list) = products.get() else {
            let text = if failed.get() { "Kunne ikke indlæse produkter." } else { "Indlæser produkter..." };
            return view! { <div class="product-loading">{text}</div> }.into_any();
        };
        view! {
            <div class="product-list">
                {list
                    .into_iter()
                    .map(|p| {
                        let id = p.id;
                        let src = resolve_picture_src(p.picture.as_deref());
                        let alt = p.name.clone();
                        view! {
                            <div class="product-card" on:click=move |_| ui.update(|s| s.open(Panel::Product(id)))>
                                <img class="product-img" src=src alt=alt/>
                                <h3>{p.name}</h3>
                                <p>{p.description}</p>
                                <div class="product-sku">{format!("SKU: {}", p.sku)}</div>
                                <div class="product-price">{format_price(p.price)}</div>
                                <div class="product-qty">{format!("Antal: {}", p.quantity)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="m-form product-list-view">
            <h2 class="m-title">"Produkter"</h2>
            {cards}
        </div>
    }
}
