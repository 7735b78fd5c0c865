//! Registration Form UI Module
//!
//! MVVM split:
//! - view_model.rs: ValidationContext, the form state and its commands
//! - view.rs: Leptos component (pure UI)
//!
//! Validation rules themselves live in `contracts::shared::registration`.

mod view;
mod view_model;

pub use view::RegistrationForm;
pub use view_model::ValidationContext;
