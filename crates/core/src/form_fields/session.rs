//! One process's form editing screen: binder + values + validation +
//! operator messages.

use serde::Serialize;

use super::binder::ConfigurationBinder;
use super::configuration::FieldValue;
use super::evaluator::{validate_form, FieldErrors};
use super::registry::FieldRegistry;
use super::render::{render_form, Control};
use crate::error::CoreError;
use crate::store::ConsoleStore;
use crate::types::DbId;

/// Shown when a save does not reach the store.
pub const SAVE_FAILED_MESSAGE: &str = "Saving failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient status line shown to the operator after a save attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl OperatorMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Result of a save or submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    /// Validation failed; nothing was sent to the store.
    Invalid(FieldErrors),
    /// The store rejected or could not be reached; edits are kept.
    Failed,
}

pub struct FormSession {
    binder: ConfigurationBinder,
    errors: FieldErrors,
    message: Option<OperatorMessage>,
}

impl FormSession {
    pub fn new(binder: ConfigurationBinder) -> Self {
        Self {
            binder,
            errors: FieldErrors::new(),
            message: None,
        }
    }

    /// Load process `process_id` from the registry's store and start a
    /// session on it.
    pub async fn open(registry: &FieldRegistry, process_id: DbId) -> Result<Self, CoreError> {
        let process = registry
            .store()
            .find_process(process_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Process", process_id))?;
        Ok(Self::new(ConfigurationBinder::select_process(
            process, registry,
        )))
    }

    pub fn binder(&self) -> &ConfigurationBinder {
        &self.binder
    }

    /// Field add/remove/reorder operations.
    pub fn binder_mut(&mut self) -> &mut ConfigurationBinder {
        &mut self.binder
    }

    /// Record an edit to the input bound to `key`.
    pub fn on_change(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.binder
            .values_mut()
            .insert(key.to_string(), value.into());
    }

    /// Errors from the last validation run.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn message(&self) -> Option<&OperatorMessage> {
        self.message.as_ref()
    }

    /// Control descriptors for every bound field, with current errors.
    pub fn controls(&self) -> Vec<Control> {
        render_form(self.binder.configuration(), &self.errors)
    }

    /// Validate all bound fields. Returns `true` when submission is allowed.
    pub fn validate(&mut self) -> bool {
        let configuration = self.binder.configuration();
        self.errors = validate_form(&configuration.fields, &configuration.values);
        self.errors.is_empty()
    }

    /// Persist the field structure (and current values) without validating.
    pub async fn save_structure(&mut self) -> SubmitOutcome {
        self.persist("Form structure").await
    }

    /// Validate, then persist when there are no errors.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            tracing::debug!(
                process_id = self.binder.process().id,
                error_count = self.errors.len(),
                "Form submission blocked by validation",
            );
            return SubmitOutcome::Invalid(self.errors.clone());
        }
        self.persist("Form").await
    }

    async fn persist(&mut self, action: &str) -> SubmitOutcome {
        self.message = None;
        match self.binder.save().await {
            Ok(()) => {
                self.message = Some(OperatorMessage::success(format!("{action} saved")));
                SubmitOutcome::Saved
            }
            Err(_) => {
                self.message = Some(OperatorMessage::error(SAVE_FAILED_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }
}
