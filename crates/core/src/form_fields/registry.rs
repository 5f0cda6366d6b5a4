//! The field definition catalog.
//!
//! One [`FieldRegistry`] is created per console session and handed by
//! reference to whatever needs the catalog. Edits apply to the loaded
//! snapshot; [`FieldRegistry::save`] writes the whole catalog back in one
//! call.

use std::collections::HashSet;
use std::sync::Arc;

use super::definition::{FieldDefinition, FieldDefinitionInput};
use crate::error::CoreError;
use crate::store::ConsoleStore;

pub struct FieldRegistry {
    store: Arc<dyn ConsoleStore>,
    definitions: Vec<FieldDefinition>,
    dirty: bool,
}

impl FieldRegistry {
    /// An empty registry that has not read the store yet.
    pub fn new(store: Arc<dyn ConsoleStore>) -> Self {
        Self {
            store,
            definitions: Vec::new(),
            dirty: false,
        }
    }

    /// Create a registry and load the catalog from the store.
    pub async fn load(store: Arc<dyn ConsoleStore>) -> Result<Self, CoreError> {
        let mut registry = Self::new(store);
        registry.refresh().await?;
        Ok(registry)
    }

    /// Re-read the catalog, discarding unsaved local edits.
    ///
    /// Store failures are returned as-is; nothing is retried and the current
    /// snapshot is left untouched.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        self.definitions = self.store.load_field_definitions().await?;
        self.dirty = false;
        Ok(())
    }

    /// The store this registry reads from and writes to.
    pub fn store(&self) -> &Arc<dyn ConsoleStore> {
        &self.store
    }

    /// All definitions, in insertion order.
    pub fn list(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    pub fn get(&self, id: &str) -> Option<&FieldDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Whether local edits have not been written to the store yet.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Add a definition built from `draft` to the end of the catalog.
    ///
    /// Keys are not checked for uniqueness.
    pub fn create(&mut self, draft: FieldDefinitionInput) -> Result<FieldDefinition, CoreError> {
        let definition = FieldDefinition::create(draft)?;
        self.definitions.push(definition.clone());
        self.dirty = true;
        Ok(definition)
    }

    /// Replace every mutable attribute of the definition with `id`.
    pub fn update(
        &mut self,
        id: &str,
        draft: FieldDefinitionInput,
    ) -> Result<FieldDefinition, CoreError> {
        let definition = self
            .definitions
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::not_found("FieldDefinition", id))?;
        definition.apply(draft)?;
        self.dirty = true;
        Ok(definition.clone())
    }

    /// Remove the definition with `id` and return it.
    ///
    /// Configurations that already bound a copy keep it.
    pub fn delete(&mut self, id: &str) -> Result<FieldDefinition, CoreError> {
        let index = self
            .definitions
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| CoreError::not_found("FieldDefinition", id))?;
        self.dirty = true;
        Ok(self.definitions.remove(index))
    }

    /// Write the current catalog to the store.
    ///
    /// On failure the local edits stay in place so the save can be retried.
    pub async fn save(&mut self) -> Result<(), CoreError> {
        match self.store.save_field_definitions(&self.definitions).await {
            Ok(()) => {
                self.dirty = false;
                tracing::info!(count = self.definitions.len(), "Saved field definitions");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to save field definitions");
                Err(err)
            }
        }
    }

    /// Replace the whole catalog with `all` and write it to the store.
    ///
    /// Rejects catalogs that repeat an id. `options` are dropped from
    /// non-select definitions.
    pub async fn save_all(&mut self, all: Vec<FieldDefinition>) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = all.iter().find(|d| !seen.insert(d.id.as_str())) {
            return Err(CoreError::Validation(format!(
                "Duplicate field definition id '{}'",
                duplicate.id
            )));
        }
        self.definitions = all.into_iter().map(FieldDefinition::normalized).collect();
        self.dirty = true;
        self.save().await
    }
}
