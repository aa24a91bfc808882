//! The `len=N` rule

use crate::foundation::FieldValue;
use crate::rules::Violation;
use crate::rules::range::char_len;

/// Fails when a string is not exactly `len` characters long.
///
/// Only strings are checked; every other kind passes.
pub fn check_len(value: &FieldValue<'_>, len: u64) -> Result<(), Violation> {
    match *value {
        FieldValue::Str(s) if char_len(s) != len => Err(Violation::LengthMismatch { len }),
        _ => Ok(()),
    }
}
