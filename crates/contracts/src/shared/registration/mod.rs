//! Registration form model and validation rules.
//!
//! Everything here is pure: the frontend maps the results onto the page.
//! - `aggregate`: the form DTO, field identifiers and the full/per-field validation
//! - `rules`: the email and password predicates
//! - `errors`: error slots and the form-level message

pub mod aggregate;
pub mod errors;
pub mod rules;

pub use aggregate::{Field, RegistrationForm, RegistrationSubmission};
pub use errors::{FieldError, FieldErrors, FormMessage};
pub use rules::{is_valid_email, is_valid_password};
