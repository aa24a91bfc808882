//! Core validation types
//!
//! This module contains the building blocks everything else sits on:
//!
//! - **Values**: [`FieldValue`], [`IntoFieldValue`]
//! - **Registry**: [`Record`], [`FieldDescriptor`], [`Visibility`]
//! - **Errors**: [`ValidationError`], [`ConfigError`]
//!
//! # Architecture
//!
//! A record never gets inspected at runtime. Its type lists its own fields
//! through [`Record::fields`], each one a [`FieldDescriptor`] holding the
//! field's name, its rule declaration and a borrowed [`FieldValue`]. Optional
//! wrappers are already resolved by the time the validator sees the value:
//! `Option<T>` becomes either [`FieldValue::Absent`] or `T`'s own value.
//!
//! ```rust
//! use struct_rules::foundation::{FieldValue, Record};
//!
//! struct User {
//!     name: Option<String>,
//!     age: u32,
//! }
//!
//! struct_rules::record! {
//!     User {
//!         "Name" => name: "required,min=3,max=50",
//!         "Age" => age: "min=18,max=100",
//!     }
//! }
//!
//! let user = User { name: None, age: 30 };
//! let fields = user.fields();
//! assert_eq!(fields[0].value(), FieldValue::Absent);
//! assert_eq!(fields[1].value(), FieldValue::Int(30));
//! ```

pub mod error;
pub mod record;
pub mod value;

pub use error::{ConfigError, ValidationError, ValidationResult};
pub use record::{FieldDescriptor, Record, Visibility};
pub use value::{FieldValue, IntoFieldValue};
