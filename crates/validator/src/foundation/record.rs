//! Field registry for validatable records
//!
//! Instead of inspecting a type at runtime, every record type lists its own
//! fields through [`Record::fields`]: one [`FieldDescriptor`] per field, in
//! declaration order, carrying the field's name, its rule declaration and a
//! borrowed view of its current value. The [`record!`](crate::record) macro
//! writes this impl for you.

use crate::foundation::value::{FieldValue, IntoFieldValue};

// ============================================================================
// VISIBILITY
// ============================================================================

/// Whether a field is visible to the validator.
///
/// Private fields are listed so that the registry mirrors the type's layout,
/// but they are never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Externally visible; validated when it carries rules.
    #[default]
    Public,
    /// Internal state; always skipped.
    Private,
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field of a record, as presented to the validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor<'a> {
    name: &'static str,
    rules: Option<&'static str>,
    visibility: Visibility,
    value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    /// Creates an untagged, public field descriptor.
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            rules: None,
            visibility: Visibility::Public,
            value,
        }
    }

    /// Creates a descriptor from anything that converts into a [`FieldValue`].
    pub fn of<T>(name: &'static str, value: &'a T) -> Self
    where
        T: IntoFieldValue + ?Sized,
    {
        Self::new(name, value.field_value())
    }

    /// Attaches a rule declaration such as `"required,min=3,max=50"`.
    ///
    /// An empty declaration is the same as none at all.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: &'static str) -> Self {
        self.rules = (!rules.is_empty()).then_some(rules);
        self
    }

    /// Marks the field as private.
    #[must_use = "builder methods must be chained or built"]
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// The field's name, as reported in errors and keyed in custom errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw rule declaration, if any.
    pub fn rules(&self) -> Option<&'static str> {
        self.rules
    }

    /// The field's visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The field's resolved value.
    pub fn value(&self) -> FieldValue<'a> {
        self.value
    }

    /// Returns `true` if the validator should look at this field at all.
    pub fn is_validated(&self) -> bool {
        self.visibility == Visibility::Public && self.rules.is_some()
    }
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A type whose fields can be validated.
///
/// # Examples
///
/// ```rust
/// use struct_rules::foundation::{FieldDescriptor, Record};
///
/// struct Signup {
///     email: String,
///     age: u32,
/// }
///
/// impl Record for Signup {
///     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
///         vec![
///             FieldDescriptor::of("Email", &self.email).with_rules("required,email"),
///             FieldDescriptor::of("Age", &self.age).with_rules("min=18"),
///         ]
///     }
/// }
/// ```
pub trait Record {
    /// Lists every field in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        (**self).fields()
    }
}

// ============================================================================
// TESTS
// ============================================================================
