//! TabController component
//!
//! Renders the tablist and its panels from a `TabSet` held in a signal:
//! - click on a tab selects it
//! - ArrowLeft / ArrowRight on a focused tab move the selection, wrapping at the ends
//! - the newly selected tab receives focus

use super::config::{PANEL_CLASS, TAB_CLASS};
use super::registry::render_panel_content;
use crate::shared::dom;
use contracts::shared::tabs::{ArrowDirection, TabSet};
use leptos::prelude::*;

#[component]
pub fn TabController(tab_set: TabSet) -> impl IntoView {
    let tabs = tab_set.tabs().to_vec();
    let state = RwSignal::new(tab_set);

    let focus_tab = move |index: usize| {
        let tab_id = state.with_untracked(|s| s.tabs().get(index).map(|t| t.id.clone()));
        if let Some(tab_id) = tab_id {
            if let Err(e) = dom::focus_element(&tab_id) {
                log::warn!("Tab focus failed: {}", e);
            }
        }
    };

    let select = move |index: usize| {
        if state.try_update(|s| s.select(index)).unwrap_or(false) {
            log::debug!("Tab selected: {}", index);
            focus_tab(index);
        }
    };

    let navigate = move |current: usize, direction: ArrowDirection| {
        if let Some(next) = state.try_update(|s| s.arrow_navigate(current, direction)) {
            log::debug!("Tab {} -> {} via {:?}", current, next, direction);
            focus_tab(next);
        }
    };

    let tab_buttons = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            view! {
                <button
                    type="button"
                    id=tab.id.clone()
                    class=TAB_CLASS
                    class:active=move || state.with(|s| s.is_active(index))
                    role="tab"
                    aria-controls=tab.controls_panel_id.clone()
                    aria-selected=move || state.with(|s| s.aria_selected(index))
                    tabindex=move || state.with(|s| s.tabindex(index).to_string())
                    on:click=move |_| select(index)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if let Some(direction) = ArrowDirection::from_key(&ev.key()) {
                            ev.prevent_default();
                            navigate(index, direction);
                        }
                    }
                >
                    {tab.label.clone()}
                </button>
            }
        })
        .collect_view();

    let panels = tabs
        .iter()
        .map(|tab| {
            let panel_id = tab.controls_panel_id.clone();
            let panel_id_hidden = panel_id.clone();
            let panel_id_active = panel_id.clone();
            let content = render_panel_content(&panel_id);

            view! {
                <div
                    id=panel_id
                    class=PANEL_CLASS
                    class:active=move || state.with(|s| !s.is_panel_hidden(&panel_id_active))
                    role="tabpanel"
                    aria-labelledby=tab.id.clone()
                    tabindex="0"
                    hidden=move || state.with(|s| s.is_panel_hidden(&panel_id_hidden))
                >
                    {content}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tabs">
            <div class="tabs__list" role="tablist" aria-label="Page sections">
                {tab_buttons}
            </div>
            {panels}
        </div>
    }
}
