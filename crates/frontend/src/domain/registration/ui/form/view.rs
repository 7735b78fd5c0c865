use super::view_model::ValidationContext;
use crate::shared::components::ui::{Button, FormField};
use contracts::shared::registration::Field;
use leptos::prelude::*;

pub const FORM_ID: &str = "registrationForm";
pub const MESSAGE_ID: &str = "formMessage";

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let ctx = ValidationContext::new();

    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            view! {
                <FormField
                    id=field.input_id()
                    error_id=field.error_id()
                    label=field.label()
                    input_type=field.input_type()
                    autocomplete=field.autocomplete()
                    value=Signal::derive(move || ctx.value(field))
                    error=Signal::derive(move || ctx.error_text(field))
                    on_input=Callback::new(move |value: String| ctx.on_input(field, value))
                />
            }
        })
        .collect_view();

    let message_text = move || ctx.message.get().map(|m| m.text()).unwrap_or_default();
    let message_style = move || {
        ctx.message
            .get()
            .map(|m| format!("color: {}", m.color()))
            .unwrap_or_default()
    };

    view! {
        <form
            id=FORM_ID
            class="registration-form"
            novalidate=true
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                ctx.submit();
            }
        >
            {fields}

            <div class="form__actions">
                <Button button_type="submit" variant="primary">
                    "Register"
                </Button>
            </div>

            <p id=MESSAGE_ID class="form__message" role="status" style=message_style>
                {message_text}
            </p>
        </form>
    }
}
