//! Resolved field values
//!
//! A [`FieldValue`] is what the rule catalog actually looks at: the field's
//! Rust value reduced to the handful of kinds the rules understand. Optional
//! wrappers collapse into [`FieldValue::Absent`] or into their contained value,
//! so the validator never has to care how deeply a field was wrapped.

use std::borrow::Cow;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A field value as seen by the rule catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Any primitive integer, widened so that every width compares the same way.
    Int(i128),
    /// A floating point number. Only `required` looks at it.
    Float(f64),
    /// A string slice.
    Str(&'a str),
    /// A sequence, reduced to its length.
    Seq(usize),
    /// An optional that holds nothing.
    Absent,
    /// A kind no rule interprets (booleans, user types).
    Other,
}

impl FieldValue<'_> {
    /// Returns `true` for the zero value of the field's kind.
    ///
    /// Empty strings, integer and float zero, empty sequences and absent
    /// optionals are zero. Booleans and other kinds never are.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Int(n) => *n == 0,
            FieldValue::Float(f) => *f == 0.0,
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Seq(len) => *len == 0,
            FieldValue::Absent => true,
            FieldValue::Other => false,
        }
    }

    /// Returns `true` if this is an empty optional.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Short name of the value kind, recorded on validation trace events.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Str(_) => "string",
            FieldValue::Seq(_) => "sequence",
            FieldValue::Absent => "absent",
            FieldValue::Other => "other",
        }
    }
}

// ============================================================================
// CONVERSION TRAIT
// ============================================================================

/// Types that can be presented to the rule catalog as a [`FieldValue`].
///
/// # Examples
///
/// ```rust
/// use struct_rules::foundation::{FieldValue, IntoFieldValue};
///
/// assert_eq!(42u8.field_value(), FieldValue::Int(42));
/// assert_eq!(Some("x".to_string()).field_value(), FieldValue::Str("x"));
/// assert_eq!(None::<String>.field_value(), FieldValue::Absent);
/// ```
pub trait IntoFieldValue {
    /// Borrows `self` as a field value.
    fn field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_int_field_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoFieldValue for $ty {
                #[inline]
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(*self as i128)
                }
            }
        )+
    };
}

impl_int_field_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoFieldValue for i128 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self)
    }
}

impl IntoFieldValue for u128 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        // Saturate: anything past i128::MAX is still "above any bound".
        FieldValue::Int(i128::try_from(*self).unwrap_or(i128::MAX))
    }
}

impl IntoFieldValue for f64 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl IntoFieldValue for f32 {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl IntoFieldValue for bool {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Other
    }
}

impl IntoFieldValue for str {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl IntoFieldValue for String {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl IntoFieldValue for Cow<'_, str> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

impl<T> IntoFieldValue for [T] {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T> IntoFieldValue for Vec<T> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Option<T> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Some(inner) => inner.field_value(),
            None => FieldValue::Absent,
        }
    }
}

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for Box<T> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for &T {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

// ============================================================================
// TESTS
// ============================================================================
