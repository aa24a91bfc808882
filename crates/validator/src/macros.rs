//! Macros for declaring record field tables with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`record!`] — implement [`Record`](crate::foundation::Record) from a field table
//!
//! # Examples
//!
//! ```rust
//! struct User {
//!     name: Option<String>,
//!     email: String,
//!     age: u32,
//!     nickname: String,
//!     session: String,
//! }
//!
//! struct_rules::record! {
//!     User {
//!         "Name" => name: "required,min=3,max=50",
//!         "Email" => email: "required,email",
//!         "Age" => age: "min=18,max=100",
//!         "Nickname" => nickname,
//!         private "session" => session: "required",
//!     }
//! }
//! ```

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Implements [`Record`](crate::foundation::Record) for a struct.
///
/// Each entry maps a reported field name to a struct field, optionally
/// followed by a rule declaration. Entries are validated in the order they
/// are listed.
///
/// # Entry forms
///
/// **Tagged field**:
/// ```rust,ignore
/// "Age" => age: "min=18,max=100",
/// ```
///
/// **Untagged field** (listed, never validated):
/// ```rust,ignore
/// "Nickname" => nickname,
/// ```
///
/// **Private field** (listed, never validated even with rules):
/// ```rust,ignore
/// private "session" => session: "required",
/// ```
///
/// The field's type must implement
/// [`IntoFieldValue`](crate::foundation::IntoFieldValue).
#[macro_export]
macro_rules! record {
    // ── Done ─────────────────────────────────────────────────────────────
    (@field $self_:ident, $acc:ident; $(,)?) => {};

    // ── Private entry ────────────────────────────────────────────────────
    (
        @field $self_:ident, $acc:ident;
        private $label:literal => $field:ident $(: $rules:literal)? $(, $($rest:tt)*)?
    ) => {
        $acc.push(
            $crate::foundation::FieldDescriptor::of($label, &$self_.$field)
                $(.with_rules($rules))?
                .private(),
        );
        $crate::record!(@field $self_, $acc; $($($rest)*)?);
    };

    // ── Public entry ─────────────────────────────────────────────────────
    (
        @field $self_:ident, $acc:ident;
        $label:literal => $field:ident $(: $rules:literal)? $(, $($rest:tt)*)?
    ) => {
        $acc.push(
            $crate::foundation::FieldDescriptor::of($label, &$self_.$field)
                $(.with_rules($rules))?,
        );
        $crate::record!(@field $self_, $acc; $($($rest)*)?);
    };

    // ── Entry point ──────────────────────────────────────────────────────
    (
        $ty:ty { $($body:tt)* }
    ) => {
        impl $crate::foundation::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::foundation::FieldDescriptor<'_>> {
                let mut fields = ::std::vec::Vec::new();
                $crate::record!(@field self, fields; $($body)*);
                fields
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
