//! Modal overlay hosting whichever panel `UiState` names.
//!
//! Clicking the backdrop or pressing Escape closes it.

use leptos::prelude::*;

use crate::components::delivery_form::DeliveryForm;
use crate::components::log_viewer::LogViewer;
use crate::components::login_form::LoginForm;
use crate::components::low_stock_list::LowStockList;
use crate::components::product_form::ProductForm;
use crate::components::product_list::ProductList;
use crate::components::product_page::ProductPage;
use crate::components::transfer_form::TransferForm;
use crate::components::user_form::UserForm;
use crate::components::warehouse_form::WarehouseForm;
use crate::state::ui::{Panel, UiState};

fn panel_view(panel: Panel) -> AnyView {
    match panel {
        Panel::Login => view! { <LoginForm/> }.into_any(),
        Panel::CreateProduct => view! { <ProductForm/> }.into_any(),
        Panel::CreateWarehouse => view! { <WarehouseForm/> }.into_any(),
        Panel::TransferProduct => view! { <TransferForm/> }.into_any(),
        Panel::LowStock => view! { <LowStockList/> }.into_any(),
        Panel::NewDelivery => view! { <DeliveryForm/> }.into_any(),
        Panel::ProductList => view! { <ProductList/> }.into_any(),
        Panel::CreateUser => view! { <UserForm/> }.into_any(),
        Panel::ChangeLog => view! { <LogViewer/> }.into_any(),
        Panel::Product(id) => view! { <ProductPage product_id=id/> }.into_any(),
    }
}

#[component]
pub fn Overlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && ui.with_untracked(|s| s.overlay.is_some()) {
            ev.prevent_default();
            ui.update(UiState::close_overlay);
        }
    });
    on_cleanup(move || handle.remove());

    let on_backdrop = move |_| ui.update(UiState::close_overlay);

    move || {
        ui.with(|s| s.overlay).map(|panel| {
            view! {
                <div class="overlay" on:click=on_backdrop>
                    <div class="overlay-content" on:click=|ev| ev.stop_propagation()>
                        <button class="overlay-close" title="Luk" on:click=on_backdrop>
                            "✕"
                        </button>
                        {panel_view(panel)}
                    </div>
                </div>
            }
        })
    }
}
