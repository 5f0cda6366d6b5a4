//! Form validator: pure logic, no store access.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::configuration::{FieldValue, FormValues};
use super::definition::FieldDefinition;

/// A field-level validation failure.
///
/// Serialized as the message shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    /// Required field is unset or an empty string.
    #[serde(rename = "required")]
    Required,
    /// Value does not match the field's `validationPattern`.
    #[serde(rename = "pattern mismatch")]
    PatternMismatch,
}

impl FieldError {
    /// Message shown next to the offending input.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::PatternMismatch => "pattern mismatch",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors keyed by field `key`. Empty means the form may be submitted.
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Validate every field, in order, against the collected values.
///
/// Fields sharing a key share a value slot; when several of them fail, the
/// last failure wins.
pub fn validate_form(fields: &[FieldDefinition], values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        if let Some(error) = validate_field(field, values.get(&field.key)) {
            errors.insert(field.key.clone(), error);
        }
    }
    errors
}

/// Validate one field against its current value.
pub fn validate_field(field: &FieldDefinition, value: Option<&FieldValue>) -> Option<FieldError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ if field.required => return Some(FieldError::Required),
        _ => return None,
    };

    let pattern = field.validation_pattern.as_deref()?;
    match Regex::new(pattern) {
        Ok(re) if re.is_match(&value.to_string()) => None,
        Ok(_) => Some(FieldError::PatternMismatch),
        Err(err) => {
            // A malformed pattern never fails the field.
            tracing::warn!(
                field_key = %field.key,
                pattern,
                error = %err,
                "Ignoring malformed validation pattern",
            );
            None
        }
    }
}
