use super::aggregate::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Field errors
// ============================================================================

/// Validation failure of a single field.
///
/// Never raised: it is only ever stored in the field's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    FullNameRequired,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordWeak,
    PasswordMismatch,
}

impl FieldError {
    /// Text shown next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::FullNameRequired => "Full name is required.",
            FieldError::EmailRequired => "Email address is required.",
            FieldError::EmailInvalid => "Please enter a valid email address.",
            FieldError::PasswordRequired => "Password is required.",
            FieldError::PasswordWeak => {
                "Password must be at least 8 characters, include uppercase, lowercase, and a number."
            }
            FieldError::PasswordMismatch => "Passwords do not match.",
        }
    }

}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// Error slots
// ============================================================================

/// One error slot per form field. `None` means the slot is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub full_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::FullName => self.full_name,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = error;
    }

    /// Slot text for rendering; empty string when there is no error.
    pub fn message(&self, field: Field) -> &'static str {
        self.get(field).map(|e| e.message()).unwrap_or("")
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no slot holds an error.
    pub fn is_clean(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }
}

// ============================================================================
// Form-level message
// ============================================================================

/// Message shown under the form after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMessage {
    Success,
    Failure,
}

impl FormMessage {
    pub fn text(&self) -> &'static str {
        match self {
            FormMessage::Success => "Registration successful! 🎉",
            FormMessage::Failure => "Please fix the errors above and try again.",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FormMessage::Success => "#188038",
            FormMessage::Failure => "#d93025",
        }
    }
}
