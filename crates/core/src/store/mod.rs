//! Persistence contract consumed by the registry, binder and HTTP layer.
//!
//! The backing store keeps two kinds of JSON documents: the whole field
//! catalog (written as one unit) and each process record's
//! `form_configuration`. Implementations live in `brainstudio-db`
//! (PostgreSQL) and [`memory`] (tests and demos).

pub mod memory;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::form_fields::configuration::ProcessFormConfiguration;
use crate::form_fields::definition::FieldDefinition;
use crate::process::Process;
use crate::settings::WorkflowFilters;
use crate::types::DbId;

pub use memory::MemoryStore;

/// Storage operations the console needs. Every failure to reach or write
/// the backing store surfaces as [`CoreError::Persistence`].
#[async_trait]
pub trait ConsoleStore: Send + Sync {
    /// Load the whole field catalog, in stored order.
    async fn load_field_definitions(&self) -> Result<Vec<FieldDefinition>, CoreError>;

    /// Replace the whole field catalog.
    async fn save_field_definitions(&self, definitions: &[FieldDefinition])
        -> Result<(), CoreError>;

    /// List processes ordered by id, optionally filtered by a search term.
    async fn list_processes(&self, search: Option<&str>) -> Result<Vec<Process>, CoreError>;

    async fn find_process(&self, id: DbId) -> Result<Option<Process>, CoreError>;

    /// Store `configuration` on the process and return the updated record.
    ///
    /// Fails with [`CoreError::NotFound`] when the process does not exist.
    async fn save_form_configuration(
        &self,
        id: DbId,
        configuration: &ProcessFormConfiguration,
    ) -> Result<Process, CoreError>;

    /// Default process list filters; empty filters when never saved.
    async fn load_workflow_filters(&self) -> Result<WorkflowFilters, CoreError>;

    async fn save_workflow_filters(&self, filters: &WorkflowFilters) -> Result<(), CoreError>;

    /// Cheap reachability check for health endpoints.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
