//! Client-side field validation for the login and registration forms.
//!
//! Every rule is a pure check over the raw field values. A field yields at most
//! one error (its first failing rule) while fields are checked independently,
//! so one submission can surface several errors at once.
//!
//! Login only checks that a password is present. Strength rules apply to
//! registration alone so accounts created under older rules can still sign in.

use crate::auth::types::{FieldError, FieldId};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const MIN_PASSWORD_LENGTH: usize = 8;

pub const EMAIL_REQUIRED: &str = "Email required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "Password required";
pub const PASSWORD_TOO_SHORT: &str = "Min 8 characters";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Add uppercase letter";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Add lowercase letter";
pub const PASSWORD_NEEDS_DIGIT: &str = "Add digit";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Add special character";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Result of validating one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl Validation {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns the message reported for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email))
}

/// Checks an email value that has already been trimmed.
#[must_use]
pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

/// Registration strength cascade; the first failing rule wins.
#[must_use]
pub fn password_strength_error(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Some(PASSWORD_TOO_SHORT);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(PASSWORD_NEEDS_UPPERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some(PASSWORD_NEEDS_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some(PASSWORD_NEEDS_DIGIT);
    }
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some(PASSWORD_NEEDS_SPECIAL);
    }
    None
}

#[must_use]
pub fn validate_login(email: &str, password: &str) -> Validation {
    let mut errors = Vec::new();

    if let Some(message) = email_error(email.trim()) {
        errors.push(FieldError::new(FieldId::LoginEmail, message));
    }
    if password.is_empty() {
        errors.push(FieldError::new(FieldId::LoginPassword, PASSWORD_REQUIRED));
    }

    Validation::from_errors(errors)
}

#[must_use]
pub fn validate_register(email: &str, password: &str, confirm_password: &str) -> Validation {
    let mut errors = Vec::new();

    if let Some(message) = email_error(email.trim()) {
        errors.push(FieldError::new(FieldId::RegisterEmail, message));
    }
    if let Some(message) = password_strength_error(password) {
        errors.push(FieldError::new(FieldId::RegisterPassword, message));
    }
    if password != confirm_password {
        errors.push(FieldError::new(FieldId::RegisterConfirm, PASSWORDS_DO_NOT_MATCH));
    }

    Validation::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("first.last+tag@mail.example.org"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a@b.c"));
        assert!(!valid_email("no-at-sign.com"));
        assert!(!valid_email("spaces in@mail.com"));
        assert!(!valid_email("a@b.c0m"));
    }

    #[test]
    fn empty_login_reports_both_fields() {
        let report = validate_login("", "");

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.error_for(FieldId::LoginEmail), Some(EMAIL_REQUIRED));
        assert_eq!(report.error_for(FieldId::LoginPassword), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn login_trims_email_and_accepts_weak_passwords() {
        let report = validate_login("  a@b.com ", "weak");
        assert!(report.valid);
        assert!(report.errors.is_empty());

        let report = validate_login("   ", "x");
        assert_eq!(report.error_for(FieldId::LoginEmail), Some(EMAIL_REQUIRED));

        let report = validate_login("not-an-email", "x");
        assert_eq!(report.error_for(FieldId::LoginEmail), Some(EMAIL_INVALID));
    }

    #[test]
    fn strong_passwords_pass_the_cascade() {
        for password in ["Secret#123", "Aa1!aaaa", "Very-Long-Passphrase-42"] {
            assert_eq!(password_strength_error(password), None, "{password}");
        }
    }

    #[test]
    fn each_missing_rule_reports_its_own_message() {
        let cases = [
            ("Aa1!aaa", PASSWORD_TOO_SHORT),
            ("aa1!aaaa", PASSWORD_NEEDS_UPPERCASE),
            ("AA1!AAAA", PASSWORD_NEEDS_LOWERCASE),
            ("Aa!!aaaa", PASSWORD_NEEDS_DIGIT),
            ("Aa1aaaaa", PASSWORD_NEEDS_SPECIAL),
        ];
        for (password, expected) in cases {
            assert_eq!(password_strength_error(password), Some(expected), "{password}");
        }
    }

    #[test]
    fn cascade_reports_the_first_failing_rule() {
        // fails every rule except special characters; length wins
        assert_eq!(password_strength_error("!!"), Some(PASSWORD_TOO_SHORT));
        // long enough, lacks uppercase and digit; uppercase comes first
        assert_eq!(password_strength_error("abcdefg!"), Some(PASSWORD_NEEDS_UPPERCASE));
        assert_eq!(password_strength_error(""), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn confirm_mismatch_is_independent_of_strength() {
        let report = validate_register("a@b.com", "weak", "weak");
        assert_eq!(report.error_for(FieldId::RegisterPassword), Some(PASSWORD_TOO_SHORT));
        assert_eq!(report.error_for(FieldId::RegisterConfirm), None);

        let report = validate_register("a@b.com", "Secret#123", "Secret#124");
        assert_eq!(report.error_for(FieldId::RegisterPassword), None);
        assert_eq!(
            report.error_for(FieldId::RegisterConfirm),
            Some(PASSWORDS_DO_NOT_MATCH)
        );
        assert!(!report.valid);
    }

    #[test]
    fn register_collects_errors_across_fields() {
        let report = validate_register("", "short", "other");

        assert_eq!(report.errors.len(), 3);
        assert_eq!(report.error_for(FieldId::RegisterEmail), Some(EMAIL_REQUIRED));
        assert_eq!(report.error_for(FieldId::RegisterPassword), Some(PASSWORD_TOO_SHORT));
        assert_eq!(
            report.error_for(FieldId::RegisterConfirm),
            Some(PASSWORDS_DO_NOT_MATCH)
        );
    }

    #[test]
    fn well_formed_registration_is_valid() {
        let report = validate_register("a@b.com", "Secret#123", "Secret#123");
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }
}
