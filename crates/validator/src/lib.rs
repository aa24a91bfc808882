//! # struct-rules
//!
//! Declarative per-field validation for Rust records.
//!
//! Each field of a record carries a rule declaration such as
//! `"required,min=3,max=50"`. A [`Validator`] walks the fields in declaration
//! order, runs each field's rules left to right and reports the first
//! violation as a [`ValidationError`], optionally replacing the default
//! message with one registered in a [`CustomErrors`] table.
//!
//! ## Quick Start
//!
//! ```rust
//! use struct_rules::prelude::*;
//!
//! struct User {
//!     name: Option<String>,
//!     email: String,
//!     age: u32,
//!     address: String,
//! }
//!
//! struct_rules::record! {
//!     User {
//!         "Name" => name: "required,min=3,max=50",
//!         "Email" => email: "required,email",
//!         "Age" => age: "min=18,max=100",
//!         "Address" => address: "len=10",
//!     }
//! }
//!
//! let validator = Validator::new().with_custom_errors(CustomErrors::from([
//!     ("Name", "required", "Name is required"),
//! ]));
//!
//! let user = User {
//!     name: None,
//!     email: "john.doe@example.com".into(),
//!     age: 25,
//!     address: "1234567890".into(),
//! };
//!
//! let error = validator.validate(&user).unwrap_err();
//! assert_eq!(error.to_string(), "Field 'Name' validation failed: Name is required");
//! ```
//!
//! ## Rules
//!
//! | Rule | Integers | Strings (length in chars) | Default message |
//! |---|---|---|---|
//! | `required` | not zero | not empty | `field is required` |
//! | `min=N` | `>= N` | `>= N` | `value is below minimum of N` / `length is below minimum of N` |
//! | `max=N` | `<= N` | `<= N` | `value exceeds maximum of N` / `length exceeds maximum of N` |
//! | `len=N` | — | `== N` | `length must be exactly N` |
//! | `email` | — | `local@domain.tld` | `invalid email format` |
//!
//! Unknown tokens and malformed numbers (`max=abc`) never fail.

pub mod config;
pub mod custom_errors;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validator;

pub use config::ValidatorConfig;
pub use custom_errors::CustomErrors;
pub use foundation::{
    ConfigError, FieldDescriptor, FieldValue, IntoFieldValue, Record, ValidationError,
    ValidationResult, Visibility,
};
pub use rules::{RuleKind, Violation};
pub use validator::{OverlayPolicy, Validator};
