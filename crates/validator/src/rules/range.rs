//! The `min=N` and `max=N` rules
//!
//! On integers the bound applies to the value; on strings it applies to the
//! length in characters. Every other kind passes.

use crate::foundation::FieldValue;
use crate::rules::Violation;

/// Fails when an integer is below `min` or a string is shorter than `min`.
pub fn check_min(value: &FieldValue<'_>, min: u64) -> Result<(), Violation> {
    match *value {
        FieldValue::Int(n) if n < i128::from(min) => Err(Violation::BelowMinimum { min }),
        FieldValue::Str(s) if char_len(s) < min => Err(Violation::LengthBelowMinimum { min }),
        _ => Ok(()),
    }
}

/// Fails when an integer is above `max` or a string is longer than `max`.
pub fn check_max(value: &FieldValue<'_>, max: u64) -> Result<(), Violation> {
    match *value {
        FieldValue::Int(n) if n > i128::from(max) => Err(Violation::AboveMaximum { max }),
        FieldValue::Str(s) if char_len(s) > max => Err(Violation::LengthAboveMaximum { max }),
        _ => Ok(()),
    }
}

#[inline]
pub(crate) fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}
