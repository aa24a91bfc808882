//! Default diagnostics
//!
//! A [`Violation`] is the structured form of a failed rule. Its `Display`
//! output is the default message, and each variant keeps the bound it was
//! checked against so the exact text can always be re-derived.

use crate::rules::RuleKind;

/// Default message for a missing or zero value.
pub const REQUIRED_MESSAGE: &str = "field is required";

/// Default message for a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "invalid email format";

/// A failed rule, before any custom message is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Violation {
    /// `required` on a zero or absent value.
    #[error("{}", REQUIRED_MESSAGE)]
    Required,

    /// `min=N` on an integer below `N`.
    #[error("value is below minimum of {min}")]
    BelowMinimum { min: u64 },

    /// `min=N` on a string shorter than `N` characters.
    #[error("length is below minimum of {min}")]
    LengthBelowMinimum { min: u64 },

    /// `max=N` on an integer above `N`.
    #[error("value exceeds maximum of {max}")]
    AboveMaximum { max: u64 },

    /// `max=N` on a string longer than `N` characters.
    #[error("length exceeds maximum of {max}")]
    LengthAboveMaximum { max: u64 },

    /// `len=N` on a string that is not exactly `N` characters.
    #[error("length must be exactly {len}")]
    LengthMismatch { len: u64 },

    /// `email` on a string that does not look like an address.
    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,
}

impl Violation {
    /// The rule that produced this violation.
    pub fn rule(&self) -> RuleKind {
        match self {
            Violation::Required => RuleKind::Required,
            Violation::BelowMinimum { .. } | Violation::LengthBelowMinimum { .. } => RuleKind::Min,
            Violation::AboveMaximum { .. } | Violation::LengthAboveMaximum { .. } => RuleKind::Max,
            Violation::LengthMismatch { .. } => RuleKind::Len,
            Violation::InvalidEmail => RuleKind::Email,
        }
    }

    /// The default message text.
    pub fn default_message(&self) -> String {
        self.to_string()
    }
}
