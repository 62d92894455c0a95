//! Per-field validation messages.

use std::collections::BTreeMap;

use serde::Serialize;

use super::field::Field;

/// Validation messages keyed by field, at most one per field.
///
/// The first message recorded for a field sticks; later ones for the same
/// field are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one.
    ///
    /// Returns whether the message was recorded.
    pub fn insert_first(&mut self, field: Field, message: impl Into<String>) -> bool {
        if self.0.contains_key(&field) {
            return false;
        }
        self.0.insert(field, message.into());
        true
    }

    /// The message for a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the message for one field.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}
