//! Field definitions: the reusable blueprints kept in the registry.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::FieldId;

// ---------------------------------------------------------------------------
// Field type
// ---------------------------------------------------------------------------

/// The closed set of input types a field definition can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Number,
    Textarea,
    Select,
    Checkbox,
}

impl FieldType {
    /// Wire name of the type (`"text"`, `"select"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
        }
    }

    /// Only `select` fields carry an options list.
    pub fn has_options(self) -> bool {
        self == FieldType::Select
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Definition
// ---------------------------------------------------------------------------

/// A reusable field blueprint.
///
/// Serialized with the camelCase names the console has always stored
/// (`validationPattern`, `type`), so existing documents keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: FieldId,
    /// Key under which submitted values are stored. Not unique.
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Regular expression checked against non-empty values. Compiled lazily
    /// at validation time; an invalid pattern is accepted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_pattern: Option<String>,
}

impl FieldDefinition {
    /// Build a definition from a draft, assigning a fresh UUID v4 id.
    pub fn create(input: FieldDefinitionInput) -> Result<Self, CoreError> {
        let input = input.normalized();
        input.validate()?;
        Ok(Self::from_parts(uuid::Uuid::new_v4().to_string(), input))
    }

    /// Replace every mutable attribute with the draft's. The id is kept.
    pub fn apply(&mut self, input: FieldDefinitionInput) -> Result<(), CoreError> {
        let input = input.normalized();
        input.validate()?;
        *self = Self::from_parts(std::mem::take(&mut self.id), input);
        Ok(())
    }

    /// Drop `options` from non-select definitions.
    ///
    /// Applied to documents coming in through whole-catalog writes, which
    /// bypass [`FieldDefinitionInput`].
    pub fn normalized(mut self) -> Self {
        if !self.field_type.has_options() {
            self.options = None;
        }
        self
    }

    /// Options offered by a select field; empty for every other type.
    pub fn select_options(&self) -> &[String] {
        match (&self.options, self.field_type.has_options()) {
            (Some(options), true) => options,
            _ => &[],
        }
    }

    fn from_parts(id: FieldId, input: FieldDefinitionInput) -> Self {
        Self {
            id,
            key: input.key,
            label: input.label,
            field_type: input.field_type,
            required: input.required,
            description: input.description,
            placeholder: input.placeholder,
            options: input.options,
            validation_pattern: input.validation_pattern,
        }
    }
}

// ---------------------------------------------------------------------------
// Draft input
// ---------------------------------------------------------------------------

/// Draft used to create or edit a [`FieldDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinitionInput {
    #[validate(custom(function = "not_blank", message = "Field key must not be empty"))]
    pub key: String,
    #[validate(custom(function = "not_blank", message = "Field label must not be empty"))]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub validation_pattern: Option<String>,
}

impl FieldDefinitionInput {
    /// Minimal draft with every optional attribute unset.
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            required: false,
            description: None,
            placeholder: None,
            options: None,
            validation_pattern: None,
        }
    }

    /// Drop `options` unless the draft is a select field. Everything else
    /// is kept exactly as entered.
    pub fn normalized(mut self) -> Self {
        if !self.field_type.has_options() {
            self.options = None;
        }
        self
    }
}

/// Key and label must contain something other than whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
