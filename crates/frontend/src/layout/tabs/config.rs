use contracts::shared::tabs::Tab;

pub const TAB_CLASS: &str = "tab-btn";
pub const PANEL_CLASS: &str = "tab-panel";

/// Tabs shown on the page, in display order. The marked tab starts active.
pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab::new("tab-overview", "Overview", "panel-overview").initially_active(),
        Tab::new("tab-features", "Features", "panel-features"),
        Tab::new("tab-contact", "Contact", "panel-contact"),
    ]
}
