//! The validator
//!
//! [`Validator::validate`] walks a record's fields in declaration order and
//! returns the first rule violation it finds, optionally replacing the
//! default message with one registered in its [`CustomErrors`] table.
//!
//! # Field resolution
//!
//! - Private fields and fields without a rule declaration are skipped.
//! - An absent optional fails with `field is required` before any of its
//!   rules are read, whether or not `required` is among them.
//! - Otherwise every rule runs left to right against the resolved value and
//!   the first failure wins.
//!
//! # Overlay
//!
//! Which violations may be replaced by a custom message is set by the
//! [`OverlayPolicy`]. The default, [`OverlayPolicy::Legacy`], only consults
//! `required` and `max` overrides: the `required` override applies when the
//! default text is exactly `field is required`, and the `max` override applies
//! when the default text is exactly `value exceeds maximum of N` for the
//! field's declared `max=N`. Overrides for other rules are stored but unused.
//! [`OverlayPolicy::Uniform`] consults the override of whichever rule failed.

use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::custom_errors::CustomErrors;
use crate::foundation::{FieldDescriptor, Record, ValidationError};
use crate::rules::{self, RuleKind, Violation};

// ============================================================================
// OVERLAY POLICY
// ============================================================================

/// Which violations may be replaced by a registered custom message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPolicy {
    /// Only `required` and integer `max` violations consult the table.
    #[default]
    Legacy,
    /// Every violation consults the table under its own rule name.
    Uniform,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates [`Record`]s and applies custom error messages.
///
/// # Examples
///
/// ```rust
/// use struct_rules::{CustomErrors, Validator};
///
/// struct User {
///     name: Option<String>,
///     age: u32,
/// }
///
/// struct_rules::record! {
///     User {
///         "Name" => name: "required,min=3,max=50",
///         "Age" => age: "min=18,max=100",
///     }
/// }
///
/// let validator = Validator::new()
///     .with_custom_errors(CustomErrors::from([("Age", "max", "Age cannot exceed 100")]));
///
/// let user = User { name: Some("John Doe".into()), age: 101 };
/// let error = validator.validate(&user).unwrap_err();
/// assert_eq!(error.field, "Age");
/// assert_eq!(error.message, "Age cannot exceed 100");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    custom_errors: CustomErrors,
    overlay: OverlayPolicy,
}

impl Validator {
    /// Creates a validator with no custom errors and the legacy overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from configuration.
    pub fn from_config(config: ValidatorConfig) -> Self {
        Self {
            custom_errors: config.custom_errors,
            overlay: config.overlay,
        }
    }

    /// Merges `errors` into this validator's table and returns it for chaining.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_custom_errors(mut self, errors: CustomErrors) -> Self {
        self.merge_custom_errors(errors);
        self
    }

    /// Merges `errors` into this validator's table in place.
    pub fn merge_custom_errors(&mut self, errors: CustomErrors) -> &mut Self {
        self.custom_errors.merge(errors);
        self
    }

    /// Sets the overlay policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_overlay_policy(mut self, overlay: OverlayPolicy) -> Self {
        self.overlay = overlay;
        self
    }

    /// The registered custom errors.
    pub fn custom_errors(&self) -> &CustomErrors {
        &self.custom_errors
    }

    /// The overlay policy in use.
    pub fn overlay_policy(&self) -> OverlayPolicy {
        self.overlay
    }

    /// Validates `record`, returning the first violation found.
    pub fn validate<R>(&self, record: &R) -> Result<(), ValidationError>
    where
        R: Record + ?Sized,
    {
        for field in record.fields() {
            let kind = field.value().kind_name();
            if !field.is_validated() {
                tracing::trace!(field = field.name(), kind, "skipping field");
                continue;
            }

            if let Err(error) = self.validate_field(&field) {
                tracing::debug!(
                    field = %error.field,
                    kind,
                    rule = %error.rule(),
                    overridden = error.is_overridden(),
                    "validation failed"
                );
                return Err(error);
            }
        }

        Ok(())
    }

    fn validate_field(&self, field: &FieldDescriptor<'_>) -> Result<(), ValidationError> {
        let Some(declaration) = field.rules() else {
            return Ok(());
        };
        let rules = rules::parse_rules(declaration);
        let value = field.value();

        let outcome = if value.is_absent() {
            Err(Violation::Required)
        } else {
            rules::check_all(&rules, &value)
        };

        outcome.map_err(|violation| {
            let error = ValidationError::new(field.name(), violation);
            match self.override_for(field.name(), &rules, &error) {
                Some(message) => error.with_message(message),
                None => error,
            }
        })
    }

    fn override_for(
        &self,
        field: &str,
        rules: &[rules::Rule<'_>],
        error: &ValidationError,
    ) -> Option<&str> {
        match self.overlay {
            OverlayPolicy::Uniform => self.custom_errors.get_for(field, error.rule()),
            OverlayPolicy::Legacy => {
                if let Some(message) = self.custom_errors.get_for(field, RuleKind::Required)
                    && error.message == Violation::Required.default_message()
                {
                    return Some(message);
                }

                let message = self.custom_errors.get_for(field, RuleKind::Max)?;
                let max = rules::declared_max(rules)?;
                (error.message == Violation::AboveMaximum { max }.default_message())
                    .then_some(message)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
