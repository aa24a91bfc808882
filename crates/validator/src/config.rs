//! Validator configuration
//!
//! A [`ValidatorConfig`] is the serializable form of a [`Validator`]: which
//! overlay policy to use and which custom messages to register. It is plain
//! data; nothing is read from the environment or the filesystem implicitly.
//!
//! ```rust
//! use struct_rules::{OverlayPolicy, ValidatorConfig};
//!
//! let config = ValidatorConfig::from_json_str(r#"{
//!     "overlay": "uniform",
//!     "custom_errors": { "Email": { "email": "Please provide a valid email" } }
//! }"#)?;
//!
//! assert_eq!(config.overlay, OverlayPolicy::Uniform);
//! # Ok::<(), struct_rules::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::custom_errors::CustomErrors;
use crate::foundation::ConfigError;
use crate::validator::{OverlayPolicy, Validator};

/// Serializable validator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Which violations consult the custom error table.
    pub overlay: OverlayPolicy,

    /// Messages to register.
    pub custom_errors: CustomErrors,
}

impl ValidatorConfig {
    /// Parses a configuration document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Converts an already-parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Builds a validator from these settings.
    pub fn build(self) -> Validator {
        Validator::from_config(self)
    }
}
