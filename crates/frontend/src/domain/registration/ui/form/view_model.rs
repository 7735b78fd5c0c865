use contracts::shared::registration::{Field, FieldErrors, FormMessage, RegistrationForm};
use leptos::prelude::*;

/// Field values, error slots and the form message of the registration form.
///
/// Every handler of the form goes through this object.
#[derive(Clone, Copy)]
pub struct ValidationContext {
    pub form: RwSignal<RegistrationForm>,
    pub errors: RwSignal<FieldErrors>,
    pub message: RwSignal<Option<FormMessage>>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RegistrationForm::default()),
            errors: RwSignal::new(FieldErrors::default()),
            message: RwSignal::new(None),
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.form.with(|f| f.value(field).to_string())
    }

    pub fn error_text(&self, field: Field) -> String {
        self.errors.with(|e| e.message(field).to_string())
    }

    /// Stores the new value and re-checks that field only.
    pub fn on_input(&self, field: Field, value: String) {
        self.form.update(|f| f.set(field, value));
        let error = self.form.with_untracked(|f| f.check_field(field));
        self.errors.update(|e| e.set(field, error));
    }

    /// Empties every error slot and the form message.
    pub fn clear_errors(&self) {
        self.errors.update(|e| e.clear());
        self.message.set(None);
    }

    /// Runs all rules and fills every applicable slot. True when nothing failed.
    pub fn validate_form(&self) -> bool {
        self.clear_errors();
        let errors = self.form.with_untracked(|f| f.validate());
        self.errors.set(errors);
        errors.is_clean()
    }

    /// Handles a submission attempt.
    ///
    /// On success the form is reset and a success message shown; otherwise
    /// the values stay and a retry message is shown next to the slot errors.
    pub fn submit(&self) -> bool {
        if self.validate_form() {
            let submission = self.form.with_untracked(|f| f.to_submission());
            match serde_json::to_string(&submission) {
                Ok(json) => log::info!("Registration accepted: {}", json),
                Err(e) => log::warn!("Registration accepted, payload not serializable: {}", e),
            }
            self.message.set(Some(FormMessage::Success));
            self.reset();
            true
        } else {
            let failed = self.errors.with_untracked(|e| e.count());
            log::debug!("Registration rejected: {} field(s) invalid", failed);
            self.message.set(Some(FormMessage::Failure));
            false
        }
    }

    /// Clears all values and error slots. The form message is kept.
    pub fn reset(&self) {
        self.form.set(RegistrationForm::default());
        self.errors.update(|e| e.clear());
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::registration::FieldError;

    fn fill_jane(ctx: &ValidationContext) {
        ctx.on_input(Field::FullName, "Jane Doe".into());
        ctx.on_input(Field::Email, "jane@doe.com".into());
        ctx.on_input(Field::Password, "Passw0rd".into());
        ctx.on_input(Field::ConfirmPassword, "Passw0rd".into());
    }

    #[test]
    fn test_live_check_updates_own_slot_only() {
        let ctx = ValidationContext::new();
        ctx.on_input(Field::Email, "jane@".into());
        assert_eq!(ctx.error_text(Field::Email), "Please enter a valid email address.");
        assert_eq!(ctx.error_text(Field::FullName), "");
        assert_eq!(ctx.error_text(Field::Password), "");

        ctx.on_input(Field::Email, "jane@doe.com".into());
        assert_eq!(ctx.error_text(Field::Email), "");
    }

    #[test]
    fn test_confirm_compares_against_live_password() {
        let ctx = ValidationContext::new();
        ctx.on_input(Field::Password, "Passw0rd".into());
        ctx.on_input(Field::ConfirmPassword, "Passw0r".into());
        assert_eq!(ctx.error_text(Field::ConfirmPassword), "Passwords do not match.");
        ctx.on_input(Field::ConfirmPassword, "Passw0rd".into());
        assert_eq!(ctx.error_text(Field::ConfirmPassword), "");
    }

    #[test]
    fn test_validate_empty_form() {
        let ctx = ValidationContext::new();
        assert!(!ctx.validate_form());
        for field in Field::ALL {
            assert!(!ctx.error_text(field).is_empty());
        }
    }

    #[test]
    fn test_submit_success_resets_form() {
        let ctx = ValidationContext::new();
        fill_jane(&ctx);
        assert!(ctx.submit());
        assert_eq!(ctx.message.get_untracked(), Some(FormMessage::Success));
        assert_eq!(ctx.form.get_untracked(), RegistrationForm::default());
        assert!(ctx.errors.get_untracked().is_clean());
    }

    #[test]
    fn test_submit_failure_keeps_values() {
        let ctx = ValidationContext::new();
        fill_jane(&ctx);
        ctx.on_input(Field::ConfirmPassword, "Different1".into());
        assert!(!ctx.submit());
        assert_eq!(ctx.message.get_untracked(), Some(FormMessage::Failure));
        assert_eq!(ctx.value(Field::FullName), "Jane Doe");
        let errors = ctx.errors.get_untracked();
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.confirm_password, Some(FieldError::PasswordMismatch));
    }

    #[test]
    fn test_validate_clears_previous_message() {
        let ctx = ValidationContext::new();
        assert!(!ctx.submit());
        fill_jane(&ctx);
        assert!(ctx.validate_form());
        assert_eq!(ctx.message.get_untracked(), None);
    }
}
