//! Tab state machine for a tablist with mutually exclusive panels.
//!
//! Exactly one tab is active once a `TabSet` exists; a panel is visible only
//! while the tab controlling it is active.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static description of one tab and the panel it controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub controls_panel_id: String,
    /// Marks the tab that starts active.
    #[serde(default)]
    pub active: bool,
}

impl Tab {
    pub fn new(id: &str, label: &str, controls_panel_id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            controls_panel_id: controls_panel_id.to_string(),
            active: false,
        }
    }

    pub fn initially_active(mut self) -> Self {
        self.active = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabSetError {
    Empty,
}

impl fmt::Display for TabSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabSetError::Empty => write!(f, "tab set needs at least one tab"),
        }
    }
}

impl std::error::Error for TabSetError {}

/// Keyboard direction within the tablist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Previous,
    Next,
}

impl ArrowDirection {
    /// Maps a `KeyboardEvent.key` value. Only left/right arrows are handled.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ArrowDirection::Previous),
            "ArrowRight" => Some(ArrowDirection::Next),
            _ => None,
        }
    }

    pub fn offset(&self) -> isize {
        match self {
            ArrowDirection::Previous => -1,
            ArrowDirection::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: usize,
}

impl TabSet {
    /// Builds the set, starting on the first tab marked active (tab 0 if none is).
    pub fn new(tabs: Vec<Tab>) -> Result<Self, TabSetError> {
        if tabs.is_empty() {
            return Err(TabSetError::Empty);
        }
        let active = tabs.iter().position(|t| t.active).unwrap_or(0);
        let mut set = Self { tabs, active };
        set.sync_markers();
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// A panel is hidden unless the active tab controls it.
    pub fn is_panel_hidden(&self, panel_id: &str) -> bool {
        self.active_tab().controls_panel_id != panel_id
    }

    /// Roving tabindex: 0 for the active tab, -1 for the rest.
    pub fn tabindex(&self, index: usize) -> i32 {
        if self.is_active(index) {
            0
        } else {
            -1
        }
    }

    /// Value for the `aria-selected` attribute.
    pub fn aria_selected(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "true"
        } else {
            "false"
        }
    }

    /// Deactivates every tab, then activates `index`.
    /// Returns false and leaves the state alone when `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.active = index;
        self.sync_markers();
        true
    }

    /// Moves from `current` one step in `direction`, wrapping at both ends,
    /// and selects the result.
    pub fn arrow_navigate(&mut self, current: usize, direction: ArrowDirection) -> usize {
        let next = wrap_index(current, direction.offset(), self.tabs.len());
        self.select(next);
        next
    }

    fn sync_markers(&mut self) {
        let active = self.active;
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.active = i == active;
        }
    }
}

/// `(current + offset + len) mod len`, for any offset.
pub fn wrap_index(current: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + offset).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> TabSet {
        TabSet::new(vec![
            Tab::new("tab-1", "One", "panel-1").initially_active(),
            Tab::new("tab-2", "Two", "panel-2"),
            Tab::new("tab-3", "Three", "panel-3"),
        ])
        .unwrap()
    }

    #[test]
    fn test_arrow_wraps_backwards() {
        let mut set = three_tabs();
        assert_eq!(set.arrow_navigate(0, ArrowDirection::Previous), 2);
        assert_eq!(set.active_index(), 2);
        assert!(set.is_panel_hidden("panel-1"));
        assert!(!set.is_panel_hidden("panel-3"));
    }

    #[test]
    fn test_arrow_wraps_forwards() {
        let mut set = three_tabs();
        set.select(2);
        assert_eq!(set.arrow_navigate(2, ArrowDirection::Next), 0);
        assert_eq!(set.active_tab().id, "tab-1");
    }

    #[test]
    fn test_initial_active_comes_from_marker() {
        let set = TabSet::new(vec![
            Tab::new("a", "A", "pa"),
            Tab::new("b", "B", "pb").initially_active(),
        ])
        .unwrap();
        assert_eq!(set.active_index(), 1);

        let unmarked = TabSet::new(vec![Tab::new("a", "A", "pa"), Tab::new("b", "B", "pb")])
            .unwrap();
        assert_eq!(unmarked.active_index(), 0);
    }

    #[test]
    fn test_several_markers_keep_first() {
        let set = TabSet::new(vec![
            Tab::new("a", "A", "pa"),
            Tab::new("b", "B", "pb").initially_active(),
            Tab::new("c", "C", "pc").initially_active(),
        ])
        .unwrap();
        assert_eq!(set.active_index(), 1);
        assert_eq!(set.tabs().iter().filter(|t| t.active).count(), 1);
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert_eq!(TabSet::new(vec![]), Err(TabSetError::Empty));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut set = three_tabs();
        assert!(!set.select(3));
        assert_eq!(set.active_index(), 0);
    }

    #[test]
    fn test_exactly_one_active() {
        let mut set = three_tabs();
        set.select(1);
        assert_eq!(set.tabs().iter().filter(|t| t.active).count(), 1);
        assert_eq!(set.tabindex(1), 0);
        assert_eq!(set.tabindex(0), -1);
        assert_eq!(set.aria_selected(1), "true");
        assert_eq!(set.aria_selected(2), "false");
        let visible: Vec<_> = ["panel-1", "panel-2", "panel-3"]
            .into_iter()
            .filter(|p| !set.is_panel_hidden(p))
            .collect();
        assert_eq!(visible, vec!["panel-2"]);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(ArrowDirection::from_key("ArrowLeft"), Some(ArrowDirection::Previous));
        assert_eq!(ArrowDirection::from_key("ArrowRight"), Some(ArrowDirection::Next));
        assert_eq!(ArrowDirection::from_key("ArrowUp"), None);
        assert_eq!(ArrowDirection::from_key("Enter"), None);
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, 1, 3), 2);
        assert_eq!(wrap_index(0, 1, 1), 0);
    }
}
