//! Error types for lead forms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::Field;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name that is not part of the lead record.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A solution type outside the three known branches.
    #[error("unknown solution type: {0}")]
    UnknownSolutionType(String),

    /// A `name=value` pair without the `=` separator.
    #[error("expected name=value, got: {0}")]
    InvalidPair(String),

    /// Record (de)serialization error.
    #[error("failed to parse form data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors keyed by field, at most one message per field.
///
/// A field without an entry is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<Field, String>,
}

impl ErrorMap {
    /// Creates a new empty ErrorMap.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Sets the message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Removes the message for a field, returning it if present.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    /// Drops every message.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for a specific field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns whether a field currently carries an error.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Returns the fields that carry an error.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

impl std::fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in &self.errors {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
