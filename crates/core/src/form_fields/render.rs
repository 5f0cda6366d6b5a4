//! Control descriptors: what input to show for each bound field.
//!
//! Rendering is a pure function of a field and its current value; the UI
//! layer turns the descriptors into actual widgets.

use serde::Serialize;

use super::configuration::{FieldValue, ProcessFormConfiguration};
use super::definition::{FieldDefinition, FieldType};
use super::evaluator::{FieldError, FieldErrors};

/// Label of the empty choice every select control starts with.
pub const SELECT_PROMPT: &str = "Please choose";

/// Rows shown by multi-line text controls.
pub const TEXTAREA_ROWS: u8 = 4;

/// Flavour of a single-line text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputType {
    Text,
    Email,
    Password,
}

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Which widget to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum ControlKind {
    TextInput {
        input_type: TextInputType,
        #[serde(skip_serializing_if = "Option::is_none")]
        autocomplete: Option<&'static str>,
    },
    NumberInput,
    TextArea {
        rows: u8,
    },
    Select {
        options: Vec<SelectOption>,
    },
    Checkbox,
}

/// Value the widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ControlValue {
    Text(String),
    Checked(bool),
}

/// Everything needed to render one bound field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub field_id: String,
    /// Value key; also used as the input's id and name.
    pub key: String,
    pub label: String,
    pub required: bool,
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The field declares a validation pattern.
    pub has_pattern: bool,
    #[serde(flatten)]
    pub kind: ControlKind,
    pub value: ControlValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

/// Describe the control for `field` showing `value`.
pub fn render_field(field: &FieldDefinition, value: Option<&FieldValue>) -> Control {
    let text = || value.map(ToString::to_string).unwrap_or_default();

    let (kind, shown) = match field.field_type {
        FieldType::Text => (text_input(TextInputType::Text, None), ControlValue::Text(text())),
        FieldType::Email => (
            text_input(TextInputType::Email, Some("email")),
            ControlValue::Text(text()),
        ),
        FieldType::Password => (
            text_input(TextInputType::Password, Some("new-password")),
            ControlValue::Text(text()),
        ),
        FieldType::Number => (ControlKind::NumberInput, ControlValue::Text(text())),
        FieldType::Textarea => (
            ControlKind::TextArea {
                rows: TEXTAREA_ROWS,
            },
            ControlValue::Text(text()),
        ),
        FieldType::Select => {
            let options = field.select_options();
            let current = text();
            // A value that is no longer among the options shows as unselected.
            let selected = if options.contains(&current) {
                current
            } else {
                String::new()
            };
            (
                ControlKind::Select {
                    options: select_options(options),
                },
                ControlValue::Text(selected),
            )
        }
        FieldType::Checkbox => (
            ControlKind::Checkbox,
            ControlValue::Checked(value.is_some_and(FieldValue::is_truthy)),
        ),
    };

    Control {
        field_id: field.id.clone(),
        key: field.key.clone(),
        label: field.label.clone(),
        required: field.required,
        placeholder: field.placeholder.clone().unwrap_or_default(),
        description: field.description.clone(),
        has_pattern: field.validation_pattern.is_some(),
        kind,
        value: shown,
        error: None,
    }
}

/// Describe every bound field in order, attaching errors by key.
pub fn render_form(configuration: &ProcessFormConfiguration, errors: &FieldErrors) -> Vec<Control> {
    configuration
        .fields
        .iter()
        .map(|field| {
            let mut control = render_field(field, configuration.value(&field.key));
            control.error = errors.get(&field.key).copied();
            control
        })
        .collect()
}

fn text_input(input_type: TextInputType, autocomplete: Option<&'static str>) -> ControlKind {
    ControlKind::TextInput {
        input_type,
        autocomplete,
    }
}

fn select_options(options: &[String]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PROMPT.to_string(),
    })
    .chain(options.iter().map(|o| SelectOption {
        value: o.clone(),
        label: o.clone(),
    }))
    .collect()
}
