//! Labelled inputs bound to string signals.

use leptos::prelude::*;

/// `<label>` + `<input>` pair. `kind` is the HTML input type.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="m-field">
            <span class="m-label">{label}</span>
            <input
                class="m-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line variant of `TextField`.
#[component]
pub fn TextAreaField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="m-field">
            <span class="m-label">{label}</span>
            <textarea
                class="m-input m-textarea"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `(value, label)` options for a `<select>`.
pub type SelectOptions = Vec<(String, String)>;

/// `<select>` with a disabled placeholder entry, bound to the chosen value.
#[component]
pub fn SelectField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<SelectOptions>,
) -> impl IntoView {
    view! {
        <label class="m-field">
            <span class="m-label">{label}</span>
            <select
                class="m-input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(v, text)| view! { <option value=v>{text}</option> })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
