use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::Field;

/// Minimum number of characters accepted for a first name.
pub const MIN_FIRST_NAME_LEN: usize = 5;

/// Validation errors for contact form fields.
///
/// The `Display` text is what the form shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("firstName must have at least 5 characters")]
    FirstNameTooShort,
    #[error("lastName is a required field")]
    LastNameRequired,
    #[error("email must be a valid email address")]
    InvalidEmail,
}

// Local part (dot-atoms or a quoted string), then either a bracketed IPv4
// literal or a dotted domain ending in a 2+ letter TLD.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("valid hardcoded regex")
});

/// Validates a first name: at least [`MIN_FIRST_NAME_LEN`] characters.
pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() >= MIN_FIRST_NAME_LEN {
        Ok(())
    } else {
        Err(ValidationError::FirstNameTooShort)
    }
}

/// Validates a last name: must be non-empty.
pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::LastNameRequired)
    } else {
        Ok(())
    }
}

/// Validates an email address (e.g. `landon14@yahoo.com`). Empty is invalid.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Runs the rule for `field` against `value`. The message field has no rule.
pub fn validate(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::FirstName => validate_first_name(value),
        Field::LastName => validate_last_name(value),
        Field::Email => validate_email(value),
        Field::Message => Ok(()),
    }
}
