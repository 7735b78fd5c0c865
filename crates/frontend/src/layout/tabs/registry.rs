//! Panel content registry - maps tab panel id → View.
//!
//! Every panel id referenced by `config::default_tabs` must be listed here.

use leptos::prelude::*;

const PANEL_IDS: [&str; 3] = ["panel-overview", "panel-features", "panel-contact"];

pub fn has_panel_content(panel_id: &str) -> bool {
    PANEL_IDS.contains(&panel_id)
}

pub fn render_panel_content(panel_id: &str) -> AnyView {
    match panel_id {
        "panel-overview" => view! {
            <p>
                "This page demonstrates a theme switch, a keyboard-accessible tab widget "
                "and a registration form validated as you type."
            </p>
        }
        .into_any(),
        "panel-features" => view! {
            <ul>
                <li>"Dark mode toggle"</li>
                <li>"Tabs navigable with the left and right arrow keys"</li>
                <li>"Inline validation messages for every form field"</li>
            </ul>
        }
        .into_any(),
        "panel-contact" => view! {
            <p>"Fill in the registration form below to get in touch."</p>
        }
        .into_any(),
        _ => {
            log::warn!("No content registered for panel '{}'", panel_id);
            view! { <p>"Nothing here yet."</p> }.into_any()
        }
    }
}
