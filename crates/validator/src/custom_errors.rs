//! Custom error table
//!
//! Maps a field name and a rule name to the message that should replace the
//! rule's default diagnostic. Tables are merged incrementally: a later merge
//! overwrites the `(field, rule)` pairs it names and leaves the rest alone.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rules::RuleKind;

/// `field → rule → message` overrides.
///
/// Rule keys are free-form strings so that tables loaded from configuration
/// round-trip untouched; only the catalog names (`required`, `min`, `max`,
/// `len`, `email`) are ever looked up.
///
/// # Examples
///
/// ```rust
/// use struct_rules::CustomErrors;
///
/// let mut errors = CustomErrors::from([
///     ("Email", "email", "Please provide a valid email"),
///     ("Age", "max", "Age cannot exceed 100"),
/// ]);
/// errors.merge(CustomErrors::new().with("Age", "max", "Too old"));
///
/// assert_eq!(errors.get("Age", "max"), Some("Too old"));
/// assert_eq!(errors.get("Email", "email"), Some("Please provide a valid email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomErrors {
    fields: HashMap<String, HashMap<String, String>>,
}

impl CustomErrors {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for one `(field, rule)` pair, replacing any previous one.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Option<String> {
        self.fields
            .entry(field.into())
            .or_default()
            .insert(rule.into(), message.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(
        mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.insert(field, rule, message);
        self
    }

    /// Merges `other` into `self`. Pairs present in both take `other`'s message.
    pub fn merge(&mut self, other: CustomErrors) {
        for (field, rules) in other.fields {
            self.fields.entry(field).or_default().extend(rules);
        }
    }

    /// Looks up the override for a `(field, rule)` pair.
    pub fn get(&self, field: &str, rule: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|rules| rules.get(rule))
            .map(String::as_str)
    }

    /// Looks up the override for a catalog rule.
    pub fn get_for(&self, field: &str, rule: RuleKind) -> Option<&str> {
        self.get(field, rule.name())
    }

    /// Returns `true` if there are no overrides at all.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(HashMap::is_empty)
    }

    /// Total number of `(field, rule)` pairs.
    pub fn len(&self) -> usize {
        self.fields.values().map(HashMap::len).sum()
    }

    /// Iterates over `(field, rule, message)` triples in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.fields.iter().flat_map(|(field, rules)| {
            rules
                .iter()
                .map(move |(rule, message)| (field.as_str(), rule.as_str(), message.as_str()))
        })
    }
}

impl<F, R, M> FromIterator<(F, R, M)> for CustomErrors
where
    F: Into<String>,
    R: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, R, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, rule, message) in iter {
            errors.insert(field, rule, message);
        }
        errors
    }
}

impl<F, R, M, const N: usize> From<[(F, R, M); N]> for CustomErrors
where
    F: Into<String>,
    R: Into<String>,
    M: Into<String>,
{
    fn from(entries: [(F, R, M); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<HashMap<String, HashMap<String, String>>> for CustomErrors {
    fn from(fields: HashMap<String, HashMap<String, String>>) -> Self {
        Self { fields }
    }
}
