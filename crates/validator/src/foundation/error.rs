//! Error types
//!
//! [`ValidationError`] is the single error a validation run can produce. It
//! names the failing field, carries the message the caller should display
//! (either a registered override or the default text) and keeps the
//! underlying [`Violation`] as its source.

use crate::rules::{RuleKind, Violation};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The first rule violation found in a record.
///
/// # Examples
///
/// ```rust
/// use struct_rules::foundation::ValidationError;
/// use struct_rules::rules::Violation;
///
/// let error = ValidationError::new("Age", Violation::BelowMinimum { min: 18 });
/// assert_eq!(
///     error.to_string(),
///     "Field 'Age' validation failed: value is below minimum of 18",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field '{field}' validation failed: {message}")]
pub struct ValidationError {
    /// Name of the field that failed.
    pub field: String,

    /// Message to show: the override text if one applied, else the default.
    pub message: String,

    /// The default diagnostic behind this error.
    #[source]
    pub violation: Violation,

    overridden: bool,
}

impl ValidationError {
    /// Creates an error carrying the violation's default message.
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            message: violation.default_message(),
            violation,
            overridden: false,
        }
    }

    /// Replaces the message with an override.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self.overridden = true;
        self
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Message to show.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rule that failed.
    pub fn rule(&self) -> RuleKind {
        self.violation.rule()
    }

    /// Returns `true` if a custom message was applied, even one whose text
    /// equals the default.
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Errors raised while loading a [`ValidatorConfig`](crate::config::ValidatorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has the wrong shape.
    #[error("invalid validator configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for validation.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
