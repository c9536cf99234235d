//! "Lav beholdningsstatus": stock rows the backend flags as low.

use leptos::prelude::*;

use crate::components::form_message::{FormMessage, FormStatus};
use crate::net::http::ApiError;
use crate::net::types::WarehouseProduct;
use crate::state::auth::AuthState;
use crate::util::format::{format_stock_line, is_critical_stock};
use crate::util::task::spawn_browser;

#[component]
pub fn LowStockList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let rows = RwSignal::new(None::<Vec<WarehouseProduct>>);
    let status = RwSignal::new(None::<FormStatus>);

    Effect::new(move || {
        let api = auth.get_untracked().api();
        spawn_browser(async move {
            match api.low_stock().await {
                Ok(list) => rows.set(Some(list)),
                Err(e) => {
                    log::error!("low stock load failed: {e}");
                    let msg = match e {
                        ApiError::Status { .. } => "Kunne ikke hente produkter.",
                        _ => "Netværksfejl – kunne ikke hente data.",
                    };
                    status.set(Some(FormStatus::Error(msg.to_owned())));
                }
            }
        });
    });

    let list = move || {
        rows.get().map(|rows| {
            if rows.is_empty() {
                return view! { <div class="m-empty">"Ingen produkter mangler på lager."</div> }.into_any();
            }
            rows.iter()
                .map(|row| {
                    view! {
                        <div class="m-item" class:critical=is_critical_stock(row.quantity)>
                            {format_stock_line(row)}
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="m-form">
            <h2 class="m-title">"Produkter med lav lagerbeholdning"</h2>
            <div class="m-list">{list}</div>
            <FormMessage status/>
        </div>
    }
}
