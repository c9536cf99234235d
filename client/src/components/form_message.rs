//! Success/error line shown under every form.

#[cfg(test)]
#[path = "form_message_test.rs"]
mod form_message_test;

use leptos::prelude::*;

/// Outcome of the last submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Success(String),
    Error(String),
}

impl FormStatus {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(t) | Self::Error(t) => t,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success(_) => "m-message m-success",
            Self::Error(_) => "m-message m-error",
        }
    }
}

/// Renders nothing until a status is set.
#[component]
pub fn FormMessage(status: RwSignal<Option<FormStatus>>) -> impl IntoView {
    move || {
        status.get().map(|s| {
            view! { <div class=s.css_class()>{s.text().to_owned()}</div> }
        })
    }
}
