//! Theme management module for the application.
//!
//! Provides a context-based light/dark switch. The dark mode is a `dark-mode`
//! class on the document body. The choice is not persisted and resets on reload.

use crate::shared::components::ui::Button;
use crate::shared::dom;
use leptos::prelude::*;

/// Body class applied while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// DOM id of the toggle button.
pub const TOGGLE_ID: &str = "modeToggle";

/// Display modes of the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }

    /// Toggle button text: names the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to Dark Mode",
            ThemeMode::Dark => "Switch to Light Mode",
        }
    }
}

/// Apply theme by toggling the body class.
fn apply_theme_class(mode: ThemeMode) {
    if let Err(e) = dom::set_body_class(DARK_MODE_CLASS, mode.is_dark()) {
        log::warn!("Failed to apply theme: {}", e);
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current mode signal.
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Get the current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        self.mode.set(next);
        apply_theme_class(next);
        log::debug!("Theme switched to {:?}", next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = ThemeMode::default();
    apply_theme_class(initial);

    provide_context(ThemeContext {
        mode: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Dark mode toggle button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <Button
            id=TOGGLE_ID
            variant="ghost"
            pressed=Signal::derive(move || ctx.mode().is_dark())
            on_click=Callback::new(move |_| ctx.toggle())
        >
            {move || ctx.mode().toggle_label()}
        </Button>
    }
}
