//! The `required` rule

use crate::foundation::FieldValue;
use crate::rules::Violation;

/// Fails on the zero value of the field's kind, or on an absent optional.
///
/// See [`FieldValue::is_zero`] for what counts as zero.
pub fn check_required(value: &FieldValue<'_>) -> Result<(), Violation> {
    if value.is_zero() {
        Err(Violation::Required)
    } else {
        Ok(())
    }
}
