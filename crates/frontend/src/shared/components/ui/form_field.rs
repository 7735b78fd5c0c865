use leptos::prelude::*;

/// Labelled input with an inline error slot underneath
#[component]
pub fn FormField(
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// ID for the error message element
    #[prop(into)]
    error_id: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Error text; empty means no error
    #[prop(into)]
    error: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Input type: "text" (default), "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let has_error = move || error.with(|e| !e.is_empty());
    let label_for = id.clone();
    let described_by = error_id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label}
            </label>
            <input
                id=id
                class=move || {
                    if has_error() {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                type=input_t
                prop:value=move || value.get()
                autocomplete=input_autocomplete
                aria-invalid=move || if has_error() { "true" } else { "false" }
                aria-describedby=described_by
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <span id=error_id class="form__error" aria-live="polite">
                {move || error.get()}
            </span>
        </div>
    }
}
