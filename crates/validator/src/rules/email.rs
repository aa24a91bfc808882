//! The `email` rule

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::FieldValue;
use crate::rules::Violation;

// ASCII local part, dot-separated domain, alphabetic TLD of two or more letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Returns `true` if `input` has the `local@domain.tld` shape.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Fails when a string does not look like an email address.
///
/// Non-string values pass.
pub fn check_email(value: &FieldValue<'_>) -> Result<(), Violation> {
    match *value {
        FieldValue::Str(s) if !is_valid_email(s) => Err(Violation::InvalidEmail),
        _ => Ok(()),
    }
}
