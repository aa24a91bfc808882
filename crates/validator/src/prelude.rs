//! Prelude module for convenient imports.
//!
//! Provides a single `use struct_rules::prelude::*;` import that brings in
//! the validator, the record registry and the error types.

// ============================================================================
// FOUNDATION: Values, registry, errors
// ============================================================================

pub use crate::foundation::{
    FieldDescriptor, FieldValue, IntoFieldValue, Record, ValidationError, ValidationResult,
    Visibility,
};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rules::{Rule, RuleKind, Violation, parse_rules};

// ============================================================================
// VALIDATOR
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::custom_errors::CustomErrors;
pub use crate::validator::{OverlayPolicy, Validator};
