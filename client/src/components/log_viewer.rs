//! "Ændringshistorik": change log filtered by all, user, or product.

#[cfg(test)]
#[path = "log_viewer_test.rs"]
mod log_viewer_test;

use leptos::prelude::*;

use crate::components::form_field::{SelectField, SelectOptions};
use crate::net::http::ApiError;
use crate::net::types::LogEntry;
use crate::state::auth::AuthState;
use crate::state::ui::{NoticeKind, UiState};
use crate::util::format::{format_log_timestamp, or_missing};
use crate::util::notify::show_notification;
use crate::util::task::spawn_browser;

/// Which log listing the first dropdown selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LogScope {
    All,
    User,
    Product,
}

impl LogScope {
    pub(crate) fn from_value(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Self::All),
            "user" => Some(Self::User),
            "product" => Some(Self::Product),
            _ => None,
        }
    }
}

/// True when a response issued for `issued` still matches the dropdowns.
/// `issued_target` is `None` for scope-level requests, which ignore the
/// second dropdown.
pub(crate) fn selection_unchanged(issued_scope: &str, issued_target: Option<&str>, scope: &str, target: &str) -> bool {
    issued_scope == scope && issued_target.is_none_or(|t| t == target)
}

/// One table row, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LogRow {
    pub date: String,
    pub time: String,
    pub user: String,
    pub product: String,
    pub action: String,
}

impl From<&LogEntry> for LogRow {
    fn from(entry: &LogEntry) -> Self {
        let (date, time) = format_log_timestamp(entry.time_stamp.as_ref());
        Self {
            date,
            time,
            user: or_missing(entry.user.as_ref().and_then(|u| u.username.as_deref())),
            product: or_missing(entry.product.as_ref().map(|p| p.name.as_str())),
            action: or_missing(entry.action.as_deref()),
        }
    }
}

fn failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Status { body, .. } => body.clone(),
        _ => "Netværksfejl – kunne ikke hente logs.".to_owned(),
    }
}

#[component]
fn LogTable(rows: Vec<LogRow>) -> impl IntoView {
    let body = if rows.is_empty() {
        view! {
            <tr>
                <td colspan="5">"Ingen logs fundet."</td>
            </tr>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(|r| {
                view! {
                    <tr>
                        <td>{r.date}</td>
                        <td>{r.time}</td>
                        <td>{r.user}</td>
                        <td>{r.product}</td>
                        <td>{r.action}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <div class="m-table-scroll">
            <table class="m-table">
                <thead>
                    <tr>
                        <th>"Dato"</th>
                        <th>"Tid"</th>
                        <th>"Bruger"</th>
                        <th>"Produkt"</th>
                        <th>"Beskrivelse"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

#[component]
pub fn LogViewer() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let scope = RwSignal::new(String::new());
    let targets = RwSignal::new(SelectOptions::new());
    let target = RwSignal::new(String::new());
    let rows = RwSignal::new(None::<Vec<LogRow>>);

    let show_logs = move |result: Result<Vec<LogEntry>, ApiError>| match result {
        Ok(entries) => rows.set(Some(entries.iter().map(LogRow::from).collect())),
        Err(e) => {
            rows.set(Some(Vec::new()));
            show_notification(ui, NoticeKind::Error, failure_text(&e));
        }
    };

    let still_current = move |issued_scope: &str, issued_target: Option<&str>| {
        selection_unchanged(issued_scope, issued_target, &scope.get_untracked(), &target.get_untracked())
    };

    Effect::new(move || {
        let issued_scope = scope.get();
        let Some(selected) = LogScope::from_value(&issued_scope) else {
            return;
        };
        rows.set(None);
        targets.set(SelectOptions::new());
        target.set(String::new());
        let api = auth.get_untracked().api();
        spawn_browser(async move {
            let options: Result<SelectOptions, ApiError> = match selected {
                LogScope::All => {
                    let result = api.list_logs().await;
                    if still_current(&issued_scope, None) {
                        show_logs(result);
                    }
                    return;
                }
                LogScope::User => api
                    .list_users()
                    .await
                    .map(|users| users.into_iter().map(|u| (u.id.to_string(), u.username)).collect()),
                LogScope::Product => api
                    .list_products()
                    .await
                    .map(|products| products.into_iter().map(|p| (p.id.to_string(), p.name)).collect()),
            };
            if !still_current(&issued_scope, None) {
                return;
            }
            match options {
                Ok(options) => targets.set(options),
                Err(e) => show_notification(ui, NoticeKind::Error, failure_text(&e)),
            }
        });
    });

    Effect::new(move || {
        let issued_target = target.get();
        let Ok(id) = issued_target.parse::<i64>() else {
            return;
        };
        let issued_scope = scope.get_untracked();
        let selected = LogScope::from_value(&issued_scope);
        let api = auth.get_untracked().api();
        rows.set(None);
        spawn_browser(async move {
            let result = match selected {
                Some(LogScope::User) => api.logs_for_user(id).await,
                Some(LogScope::Product) => api.logs_for_product(id).await,
                Some(LogScope::All) | None => return,
            };
            if still_current(&issued_scope, Some(&issued_target)) {
                show_logs(result);
            }
        });
    });

    let sub_select = move || {
        let (label, placeholder) = match LogScope::from_value(&scope.get())? {
            LogScope::All => return None,
            LogScope::User => ("Bruger", "Vælg bruger..."),
            LogScope::Product => ("Produkt", "Vælg produkt..."),
        };
        Some(view! { <SelectField label placeholder value=target options=targets/> })
    };

    view! {
        <div class="m-form">
            <h2 class="m-title">"Ændrings Historik"</h2>
            <select
                class="m-input"
                prop:value=move || scope.get()
                on:change=move |ev| scope.set(event_target_value(&ev))
            >
                <option value="" disabled=true selected=true>"Vælg log-type..."</option>
                <option value="all">"Alle Logs"</option>
                <option value="user">"Bruger Logs"</option>
                <option value="product">"Produkt Logs"</option>
            </select>
            <div class="m-field log-results">
                {sub_select}
                {move || rows.get().map(|rows| view! { <LogTable rows/> })}
            </div>
        </div>
    }
}
