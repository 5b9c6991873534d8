//! Field-keyed validation errors, returned as data from the controller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of step-validation failures keyed by field name, or by
/// [`ValidationErrors::GLOBAL`] for step-level aggregate errors.
///
/// Nothing here is fatal: every entry is recoverable by further edits, and
/// a field's entry is cleared the next time that field is edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Key used for step-level errors not tied to a single field.
    pub const GLOBAL: &'static str = "global";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn insert_global(&mut self, message: impl Into<String>) {
        self.insert(Self::GLOBAL, message);
    }

    /// Drop the entry for a field. Returns whether one was present.
    pub fn remove(&mut self, field: &str) -> bool {
        self.errors.remove(field).is_some()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Absorb every entry of `other` into this set.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}
