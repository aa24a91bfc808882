//! Rule catalog
//!
//! A field's rule declaration is a comma-separated list of tokens, each either
//! a bare keyword (`required`, `email`) or a `key=N` pair (`min=3`, `max=50`,
//! `len=10`). This module parses those tokens and evaluates them one at a time
//! against a resolved [`FieldValue`].
//!
//! Tokens that are unknown or carry a malformed number parse to
//! [`Rule::Inert`] and never fail. Rules that do not apply to a value's kind
//! (e.g. `len=4` on an integer) also pass.
//!
//! # Examples
//!
//! ```rust
//! use struct_rules::foundation::FieldValue;
//! use struct_rules::rules::{Rule, Violation, parse_rules};
//!
//! let rules = parse_rules("required,min=18,max=abc");
//! assert_eq!(rules.as_slice(), &[Rule::Required, Rule::Min(18), Rule::Inert("max=abc")]);
//!
//! assert_eq!(
//!     Rule::Min(18).check(&FieldValue::Int(17)),
//!     Err(Violation::BelowMinimum { min: 18 }),
//! );
//! ```

pub mod email;
pub mod length;
pub mod range;
pub mod required;
pub mod violation;

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::FieldValue;

pub use email::{check_email, is_valid_email};
pub use length::check_len;
pub use range::{check_max, check_min};
pub use required::check_required;
pub use violation::{INVALID_EMAIL_MESSAGE, REQUIRED_MESSAGE, Violation};

// ============================================================================
// RULE KIND
// ============================================================================

/// The rules the catalog knows about.
///
/// The serialized name of each kind is the key used in custom error tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Required,
    Min,
    Max,
    Len,
    Email,
}

impl RuleKind {
    /// All kinds, in catalog order.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Required,
        RuleKind::Min,
        RuleKind::Max,
        RuleKind::Len,
        RuleKind::Email,
    ];

    /// The keyword used in rule declarations and custom error tables.
    pub const fn name(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::Len => "len",
            RuleKind::Email => "email",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// RULE
// ============================================================================

/// One parsed rule token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule<'a> {
    /// `required`
    Required,
    /// `min=N`
    Min(u64),
    /// `max=N`
    Max(u64),
    /// `len=N`
    Len(u64),
    /// `email`
    Email,
    /// An unknown keyword or a numeric rule with a malformed literal.
    Inert(&'a str),
}

impl<'a> Rule<'a> {
    /// Parses a single token exactly as written.
    ///
    /// Never fails: anything unrecognised becomes [`Rule::Inert`].
    pub fn parse(token: &'a str) -> Self {
        match token {
            "required" => return Rule::Required,
            "email" => return Rule::Email,
            _ => {}
        }

        let Some((key, literal)) = token.split_once('=') else {
            return Rule::Inert(token);
        };

        let build: fn(u64) -> Rule<'a> = match key {
            "min" => Rule::Min,
            "max" => Rule::Max,
            "len" => Rule::Len,
            _ => return Rule::Inert(token),
        };

        literal.parse::<u64>().map_or(Rule::Inert(token), build)
    }

    /// The catalog entry this token maps to, if it is not inert.
    pub fn kind(&self) -> Option<RuleKind> {
        match self {
            Rule::Required => Some(RuleKind::Required),
            Rule::Min(_) => Some(RuleKind::Min),
            Rule::Max(_) => Some(RuleKind::Max),
            Rule::Len(_) => Some(RuleKind::Len),
            Rule::Email => Some(RuleKind::Email),
            Rule::Inert(_) => None,
        }
    }

    /// Evaluates this rule against a resolved value.
    pub fn check(&self, value: &FieldValue<'_>) -> Result<(), Violation> {
        match *self {
            Rule::Required => check_required(value),
            Rule::Min(min) => check_min(value, min),
            Rule::Max(max) => check_max(value, max),
            Rule::Len(len) => check_len(value, len),
            Rule::Email => check_email(value),
            Rule::Inert(_) => Ok(()),
        }
    }
}

// ============================================================================
// RULE LISTS
// ============================================================================

/// A parsed rule declaration. Most declarations have at most four tokens.
pub type RuleList<'a> = SmallVec<[Rule<'a>; 4]>;

/// Splits a rule declaration into parsed tokens, in declaration order.
pub fn parse_rules(declaration: &str) -> RuleList<'_> {
    declaration
        .split(',')
        .map(|token| {
            let rule = Rule::parse(token);
            if let Rule::Inert(token) = rule {
                tracing::trace!(token, "ignoring unrecognised rule token");
            }
            rule
        })
        .collect()
}

/// The bound of the first well-formed `max=N` token, if any.
pub fn declared_max(rules: &[Rule<'_>]) -> Option<u64> {
    rules.iter().find_map(|rule| match rule {
        Rule::Max(max) => Some(*max),
        _ => None,
    })
}

/// Runs every rule in order and returns the first violation.
pub fn check_all(rules: &[Rule<'_>], value: &FieldValue<'_>) -> Result<(), Violation> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

// ============================================================================
// TESTS
// ============================================================================
