//! Form validators for house, house-type and user submissions.
//!
//! Each validator takes an arbitrary JSON value and either returns a typed
//! draft or a [`FormViolations`] listing every field that failed, in field
//! order. Validators never stop at the first failure.

mod house;
mod house_type;
mod user;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub use house::{HOUSE_FIELD_MAX, HouseForm};
pub use house_type::{
    DESCRIPTION_MAX, HouseTypeForm, PRICE_MAX, TYPE_NAME_MAX, TYPE_NAME_MIN,
};
pub use user::{NAME_MAX, NAME_MIN, PASSWORD_MIN, UserForm};

/// One failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the field (camelCase).
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// Every constraint a submission failed.
///
/// ## Invariants
/// - Never empty once returned from a validator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormViolations(Vec<FieldViolation>);

impl FormViolations {
    /// All violations in field order.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Messages reported for `field`.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |violation| violation.field == field)
            .map(|violation| violation.message.as_str())
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Record the failure of a field check and discard its value.
    pub(crate) fn take<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(field, message);
                None
            }
        }
    }

    pub(crate) fn into_result<T>(self, value: Option<T>) -> Result<T, Self> {
        match value {
            Some(value) if self.is_empty() => Ok(value),
            _ => Err(self),
        }
    }
}

impl fmt::Display for FormViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormViolations {}

/// Read-only view over a submitted JSON object.
///
/// Non-object input behaves like an empty object, so every required field
/// reports as missing.
pub(crate) struct FormInput<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> FormInput<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    fn raw(&self, field: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(field))
            .filter(|value| !value.is_null())
    }

    /// A string field; `Ok(None)` when absent or null.
    pub(crate) fn optional_str(&self, field: &str, label: &str) -> Result<Option<&'a str>, String> {
        match self.raw(field) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(_) => Err(format!("{label} must be a string")),
        }
    }

    /// A required string field; absent or null reports `<label> is required`.
    pub(crate) fn required_str(&self, field: &str, label: &str) -> Result<&'a str, String> {
        self.optional_str(field, label)?
            .ok_or_else(|| format!("{label} is required"))
    }

    /// A required numeric field.
    pub(crate) fn required_number(&self, field: &str, label: &str) -> Result<f64, String> {
        match self.raw(field) {
            None => Err(format!("{label} is required")),
            Some(Value::Number(number)) => number
                .as_f64()
                .ok_or_else(|| format!("{label} must be a number")),
            Some(_) => Err(format!("{label} must be a number")),
        }
    }
}

/// Length in Unicode scalar values.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Bound a string's length, reporting the given messages.
pub(crate) fn check_length(
    value: &str,
    min: usize,
    max: usize,
    too_short: impl FnOnce() -> String,
    too_long: impl FnOnce() -> String,
) -> Result<String, String> {
    let length = char_len(value);
    if length < min {
        return Err(too_short());
    }
    if length > max {
        return Err(too_long());
    }
    Ok(value.to_owned())
}
