//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the warehouse views and chrome while reading/writing
//! shared state from Leptos context providers. Each overlay view owns its
//! form signals and calls `net::api` directly.

pub mod dashboard_card;
pub mod delivery_form;
pub mod form_field;
pub mod form_message;
pub mod header;
pub mod log_viewer;
pub mod login_form;
pub mod low_stock_list;
pub mod notifications;
pub mod overlay;
pub mod product_form;
pub mod product_list;
pub mod product_page;
pub mod search_bar;
pub mod transfer_form;
pub mod user_form;
pub mod warehouse_form;
