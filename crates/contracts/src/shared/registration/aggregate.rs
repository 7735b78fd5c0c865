use super::errors::{FieldError, FieldErrors};
use super::rules::{is_valid_email, is_valid_password, trim_js};
use serde::{Deserialize, Serialize};

// ============================================================================
// Field identifiers
// ============================================================================

/// Inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FullName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// DOM id of the input element.
    pub fn input_id(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "emailAddress",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// DOM id of the element holding the field's error text.
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::FullName => "fullNameError",
            Field::Email => "emailError",
            Field::Password => "passwordError",
            Field::ConfirmPassword => "confirmPasswordError",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Value of the input's `type` attribute.
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::FullName => "text",
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
        }
    }

    pub fn autocomplete(&self) -> &'static str {
        match self {
            Field::FullName => "name",
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "new-password",
        }
    }
}

// ============================================================================
// Form DTO
// ============================================================================

/// Raw values of the registration form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    /// Runs the live check of a single field.
    ///
    /// Name and email are trimmed before checking; passwords are compared raw.
    /// The confirmation is checked against the current password value, and an
    /// empty confirmation never matches.
    pub fn check_field(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::FullName => {
                if trim_js(&self.full_name).is_empty() {
                    Some(FieldError::FullNameRequired)
                } else {
                    None
                }
            }
            Field::Email => {
                let email = trim_js(&self.email);
                if email.is_empty() {
                    Some(FieldError::EmailRequired)
                } else if !is_valid_email(email) {
                    Some(FieldError::EmailInvalid)
                } else {
                    None
                }
            }
            Field::Password => {
                if self.password.is_empty() {
                    Some(FieldError::PasswordRequired)
                } else if !is_valid_password(&self.password) {
                    Some(FieldError::PasswordWeak)
                } else {
                    None
                }
            }
            Field::ConfirmPassword => {
                if self.confirm_password.is_empty() || self.confirm_password != self.password {
                    Some(FieldError::PasswordMismatch)
                } else {
                    None
                }
            }
        }
    }

    /// Evaluates every rule, without short-circuiting, so all applicable
    /// errors are reported at once.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, self.check_field(field));
        }
        errors
    }

    /// What a successful registration hands on. Passwords are left out.
    pub fn to_submission(&self) -> RegistrationSubmission {
        RegistrationSubmission {
            full_name: trim_js(&self.full_name).to_string(),
            email: trim_js(&self.email).to_string(),
        }
    }
}

/// Accepted registration, without secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    pub full_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> RegistrationForm {
        RegistrationForm {
            full_name: "Jane Doe".into(),
            email: "jane@doe.com".into(),
            password: "Passw0rd".into(),
            confirm_password: "Passw0rd".into(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = RegistrationForm::default().validate();
        assert!(!errors.is_clean());
        assert_eq!(errors.full_name, Some(FieldError::FullNameRequired));
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.password, Some(FieldError::PasswordRequired));
        assert_eq!(errors.confirm_password, Some(FieldError::PasswordMismatch));
        assert_eq!(errors.count(), 4);
    }

    #[test]
    fn test_valid_form() {
        let errors = jane().validate();
        assert!(errors.is_clean());
        for field in Field::ALL {
            assert_eq!(errors.message(field), "");
        }
    }

    #[test]
    fn test_confirm_changed_after_success() {
        let mut form = jane();
        assert!(form.validate().is_clean());

        form.set(Field::ConfirmPassword, "Passw0rd!".into());
        let errors = form.validate();
        assert!(!errors.is_clean());
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.confirm_password, Some(FieldError::PasswordMismatch));
    }

    #[test]
    fn test_whitespace_name_is_empty() {
        let mut form = jane();
        form.full_name = "   \t".into();
        assert_eq!(form.check_field(Field::FullName), Some(FieldError::FullNameRequired));
    }

    #[test]
    fn test_email_is_trimmed() {
        let mut form = jane();
        form.email = "  jane@doe.com  ".into();
        assert_eq!(form.check_field(Field::Email), None);

        form.email = "   ".into();
        assert_eq!(form.check_field(Field::Email), Some(FieldError::EmailRequired));

        form.email = "jane@doe".into();
        assert_eq!(form.check_field(Field::Email), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_browser_whitespace_trimming() {
        let mut form = jane();
        form.full_name = "\u{FEFF}".into();
        assert_eq!(form.check_field(Field::FullName), Some(FieldError::FullNameRequired));

        form.email = "\u{FEFF}user@example.com".into();
        assert_eq!(form.check_field(Field::Email), None);

        form.full_name = "\u{85}".into();
        assert_eq!(form.check_field(Field::FullName), None);
    }

    #[test]
    fn test_password_checks() {
        let mut form = jane();
        form.password = "".into();
        assert_eq!(form.check_field(Field::Password), Some(FieldError::PasswordRequired));

        form.password = "password1".into();
        assert_eq!(form.check_field(Field::Password), Some(FieldError::PasswordWeak));
    }

    #[test]
    fn test_passwords_compared_raw() {
        let mut form = jane();
        form.confirm_password = "Passw0rd ".into();
        assert_eq!(
            form.check_field(Field::ConfirmPassword),
            Some(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_live_check_only_touches_its_field() {
        let mut form = RegistrationForm::default();
        form.set(Field::Email, "not-an-email".into());
        assert_eq!(form.check_field(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(form.check_field(Field::FullName), Some(FieldError::FullNameRequired));
        assert_eq!(form.value(Field::Email), "not-an-email");
    }

    #[test]
    fn test_submission_has_no_secrets() {
        let mut form = jane();
        form.full_name = " Jane Doe ".into();
        let json = serde_json::to_string(&form.to_submission()).unwrap();
        assert_eq!(json, r#"{"fullName":"Jane Doe","email":"jane@doe.com"}"#);
        assert!(!json.contains("Passw0rd"));
    }
}
