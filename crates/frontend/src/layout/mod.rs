pub mod tabs;

use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  title                       ThemeToggle |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <h1 class="top-header__title">"Interactive Page"</h1>
                <ThemeToggle />
            </header>

            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
