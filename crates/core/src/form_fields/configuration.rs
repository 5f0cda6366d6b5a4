//! The per-process form configuration: bound fields plus collected values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::definition::FieldDefinition;

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A single collected value.
///
/// Number inputs hold their text while being edited, so a number field can
/// carry either `Number` or `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// `true` for an empty string. Booleans and numbers are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    /// Truthiness used by checkbox controls: `false`, `0` and `""` are off.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            FieldValue::Text(s) => !s.is_empty(),
        }
    }
}

/// String coercion used for pattern checks and text controls.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            // Floats use shortest form, so a whole `1.0` prints as `1`.
            FieldValue::Number(n) => match n.as_f64() {
                Some(float) if n.is_f64() => write!(f, "{float}"),
                _ => write!(f, "{n}"),
            },
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Collected values keyed by field `key`. Two bound fields sharing a key
/// share one slot.
pub type FormValues = BTreeMap<String, FieldValue>;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Ordered field snapshots bound to one process, plus the values entered
/// for them.
///
/// `values` is never pruned when a field is removed, so it may hold keys
/// that no current field uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessFormConfiguration {
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default, deserialize_with = "deserialize_values")]
    pub values: FormValues,
}

impl ProcessFormConfiguration {
    pub fn contains_field(&self, id: &str) -> bool {
        self.fields.iter().any(|f| f.id == id)
    }

    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }
}

/// Stored documents may contain `null` for a cleared input; treat it as
/// unset rather than rejecting the whole configuration.
fn deserialize_values<'de, D>(deserializer: D) -> Result<FormValues, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<FieldValue>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect())
}
