//! Header search over the product catalogue.
//!
//! The list is fetched once when the bar mounts and filtered locally on every
//! keystroke. If the fetch fails the bar is not shown at all.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::auth::AuthState;
use crate::state::ui::{Panel, UiState};
use crate::util::format::resolve_picture_src;
use crate::util::search::filter_products;
use crate::util::task::spawn_browser;

#[component]
pub fn SearchBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let catalogue = RwSignal::new(None::<Vec<Product>>);
    let query = RwSignal::new(String::new());
    let open = RwSignal::new(false);

    Effect::new(move || {
        let api = auth.get_untracked().api();
        spawn_browser(async move {
            match api.search_products().await {
                Ok(products) => catalogue.set(Some(products)),
                Err(e) => log::error!("Failed to fetch search products: {e}"),
            }
        });
    });

    let results = move || {
        let q = query.get();
        catalogue.with(|list| {
            list.as_deref()
                .map(|list| filter_products(list, &q).into_iter().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    let choose = move |product: &Product| {
        query.set(product.name.clone());
        open.set(false);
        ui.update(|s| s.open(Panel::Product(product.id)));
    };

    view! {
        <Show when=move || catalogue.with(Option::is_some)>
            <div class="search-wrapper">
                <input
                    class="search-bar"
                    type="search"
                    placeholder="Søg efter produkter"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        open.set(true);
                    }
                />
                <Show when=move || open.get() && !results().is_empty()>
                    <div class="search-results">
                        {move || {
                            results()
                                .into_iter()
                                .map(|p| {
                                    let src = resolve_picture_src(p.picture.as_deref());
                                    let alt = p.name.clone();
                                    let price = format!("{} kr", p.price);
                                    let name = p.name.clone();
                                    let sku = p.sku.clone();
                                    view! {
                                        <div class="search-result-item" on:click=move |_| choose(&p)>
                                            <img class="result-image" src=src alt=alt/>
                                            <div class="result-info">
                                                <span class="result-name">{name}</span>
                                                <span class="result-price">{price}</span>
                                                <span class="result-sku">{sku}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
