//! Signed-in dashboard: header plus the card grid that opens each view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dashboard_card::DashboardCard;
use crate::components::header::Header;
use crate::state::ui::Panel;

/// Card titles and the view each one opens, in grid order.
pub(crate) const DASHBOARD_CARDS: &[(&str, Panel)] = &[
    ("Opret produkt", Panel::CreateProduct),
    ("Opret lager", Panel::CreateWarehouse),
    ("Flyt produkt til lager", Panel::TransferProduct),
    ("Lav beholdningsstatus", Panel::LowStock),
    ("Registrer ny leverance", Panel::NewDelivery),
    ("Se alle produkter", Panel::ProductList),
    ("Opret bruger", Panel::CreateUser),
    ("Ændringshistorik", Panel::ChangeLog),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Header/>
        <div id="dashboard-wrapper">
            <div id="dashboard-grid">
                {DASHBOARD_CARDS
                    .iter()
                    .map(|&(title, panel)| view! { <DashboardCard title panel/> })
                    .collect_view()}
            </div>
        </div>
    }
}
