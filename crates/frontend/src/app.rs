use crate::domain::registration::ui::form::RegistrationForm;
use crate::layout::tabs::{default_tabs, TabController};
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use contracts::shared::tabs::TabSet;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let tabs = match TabSet::new(default_tabs()) {
        Ok(tabs) => Some(tabs),
        Err(e) => {
            log::error!("Tab controller disabled: {}", e);
            None
        }
    };

    view! {
        <ThemeProvider>
            <Shell>
                <section class="page-section" aria-labelledby="tabsHeading">
                    <h2 id="tabsHeading">"About"</h2>
                    {tabs.map(|tab_set| view! { <TabController tab_set=tab_set /> })}
                </section>
                <section class="page-section" aria-labelledby="registrationHeading">
                    <h2 id="registrationHeading">"Register"</h2>
                    <RegistrationForm />
                </section>
            </Shell>
        </ThemeProvider>
    }
}
