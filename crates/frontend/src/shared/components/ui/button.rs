use leptos::prelude::*;

/// Button component with variants (primary, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// ID for the button element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Toggle state, rendered as `aria-pressed` when set
    #[prop(optional, into)]
    pressed: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            id=move || id.get()
            class=move || format!("button {}", variant_class())
            aria-pressed=move || pressed.get().map(|p| p.to_string())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
