//! Tabbed panel widget
//!
//! Contains:
//! - `config` - the fixed list of tabs rendered on the page
//! - `controller` - the TabController component (pointer + arrow-key navigation)
//! - `registry` - mapping panel id → View

pub mod config;
pub mod controller;
pub mod registry;

pub use config::default_tabs;
pub use controller::TabController;
