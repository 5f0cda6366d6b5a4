//! Assigns an ordered subset of the catalog to one process.
//!
//! The binder works on a copy of the process's configuration and on the
//! catalog as it was when the process was selected. Nothing reaches the
//! store until [`ConfigurationBinder::save`].

use std::collections::HashSet;
use std::sync::Arc;

use super::configuration::{FormValues, ProcessFormConfiguration};
use super::definition::FieldDefinition;
use super::registry::FieldRegistry;
use crate::error::CoreError;
use crate::process::Process;
use crate::store::ConsoleStore;

pub struct ConfigurationBinder {
    store: Arc<dyn ConsoleStore>,
    process: Process,
    catalog: Vec<FieldDefinition>,
    working: ProcessFormConfiguration,
}

impl ConfigurationBinder {
    /// Start editing `process`, snapshotting its configuration (or an empty
    /// one) and the registry's current catalog.
    ///
    /// A stored configuration that binds the same field id twice keeps only
    /// the first occurrence.
    pub fn select_process(process: Process, registry: &FieldRegistry) -> Self {
        let mut working = process.configuration();
        let mut seen = HashSet::new();
        working.fields.retain(|f| seen.insert(f.id.clone()));

        Self {
            store: Arc::clone(registry.store()),
            catalog: registry.list().to_vec(),
            process,
            working,
        }
    }

    /// The process record as last loaded or saved.
    pub fn process(&self) -> &Process {
        &self.process
    }

    /// The working configuration, including unsaved edits.
    pub fn configuration(&self) -> &ProcessFormConfiguration {
        &self.working
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.working.fields
    }

    pub fn values(&self) -> &FormValues {
        &self.working.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut FormValues {
        &mut self.working.values
    }

    /// Catalog entries not bound yet, in catalog order.
    pub fn available_definitions(&self) -> impl Iterator<Item = &FieldDefinition> + '_ {
        self.catalog
            .iter()
            .filter(|d| !self.working.contains_field(&d.id))
    }

    /// Append a copy of the catalog definition `definition_id`.
    ///
    /// Returns `false` without changing anything when the id is unknown or
    /// already bound.
    pub fn add_field(&mut self, definition_id: &str) -> bool {
        if self.working.contains_field(definition_id) {
            tracing::debug!(definition_id, "Field already bound");
            return false;
        }
        let Some(definition) = self.catalog.iter().find(|d| d.id == definition_id) else {
            tracing::debug!(definition_id, "Unknown field definition");
            return false;
        };
        self.working.fields.push(definition.clone());
        true
    }

    /// Unbind the field with `id`. Its value stays in `values`.
    pub fn remove_field(&mut self, id: &str) -> bool {
        let before = self.working.fields.len();
        self.working.fields.retain(|f| f.id != id);
        self.working.fields.len() != before
    }

    /// Swap the field at `index` with its predecessor. No-op at index 0.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.working.fields.len() {
            return false;
        }
        self.working.fields.swap(index - 1, index);
        true
    }

    /// Swap the field at `index` with its successor. No-op at the last index.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.working.fields.len().saturating_sub(1) {
            return false;
        }
        self.working.fields.swap(index, index + 1);
        true
    }

    /// Store the working `{fields, values}` on the process.
    ///
    /// On success the held process record is replaced by the stored one. On
    /// failure the working copy is untouched so the save can be retried.
    pub async fn save(&mut self) -> Result<(), CoreError> {
        let process_id = self.process.id;
        match self
            .store
            .save_form_configuration(process_id, &self.working)
            .await
        {
            Ok(saved) => {
                tracing::info!(
                    process_id,
                    field_count = self.working.fields.len(),
                    "Saved form configuration",
                );
                self.process = saved;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(process_id, error = %err, "Failed to save form configuration");
                Err(err)
            }
        }
    }
}
